//! Headline KPI computation
//!
//! Single-pass reduction of a call batch into the counts and rates the
//! dashboard header renders.

use crate::AnalyticsError;
use serde::{Deserialize, Serialize};
use venlyn_domain::{CallRecord, Disposition, Intent};

/// Spam score above which a call counts as spam even without an explicit
/// spam disposition
///
/// The OR-combination is intentional: either signal alone is sufficient.
pub const SPAM_SCORE_THRESHOLD: u8 = 80;

/// Headline aggregates over a call batch
///
/// A pure computation result, recomputed on every query and never cached.
/// Rates are floating-point percentages on the 0-100 scale; monetary values
/// are integer cents. Field names serialize exactly as the dashboard API
/// expects (`totalCalls`, `answerRate`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    /// Count of input records
    pub total_calls: u64,

    /// Calls with an `answered` disposition
    pub answered_calls: u64,

    /// Calls with a `missed` disposition
    pub missed_calls: u64,

    /// Calls with a `booked` disposition
    pub booked_jobs: u64,

    /// Calls the AI classified as emergencies
    pub emergency_calls: u64,

    /// Calls flagged spam by disposition or score
    pub spam_calls: u64,

    /// Sum of value estimates in cents, spam excluded
    pub total_value: u64,

    /// `answered / total * 100`, 0 when there are no calls
    pub answer_rate: f64,

    /// `booked / answered * 100`, 0 when nothing was answered
    pub booking_rate: f64,

    /// `total_value / answered` in cents, 0 when nothing was answered
    pub avg_call_value: f64,
}

/// Whether a record counts as spam for KPI purposes
pub(crate) fn is_spam(call: &CallRecord) -> bool {
    call.disposition == Some(Disposition::Spam)
        || call.spam_score.is_some_and(|score| score > SPAM_SCORE_THRESHOLD)
}

/// Reject the whole batch if any record violates its invariants
pub(crate) fn validate_batch(calls: &[CallRecord]) -> Result<(), AnalyticsError> {
    for call in calls {
        call.check_invariants().map_err(AnalyticsError::InvalidInput)?;
    }
    Ok(())
}

/// Reduce a call batch into headline KPIs
///
/// Absent optional fields contribute their neutral value: a call without a
/// value estimate adds 0 cents, a call without a disposition counts toward
/// `total_calls` only. Division-by-zero cases are defined as 0 rather than
/// errors.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if any record fails its
/// invariant check; the batch is rejected whole.
pub fn compute_kpis(calls: &[CallRecord]) -> Result<KpiData, AnalyticsError> {
    validate_batch(calls)?;

    let mut kpis = KpiData {
        total_calls: calls.len() as u64,
        ..KpiData::default()
    };

    for call in calls {
        match call.disposition {
            Some(Disposition::Answered) => kpis.answered_calls += 1,
            Some(Disposition::Missed) => kpis.missed_calls += 1,
            Some(Disposition::Booked) => kpis.booked_jobs += 1,
            Some(Disposition::Spam) | Some(Disposition::Callback) | None => {}
        }

        if call.intent == Some(Intent::Emergency) {
            kpis.emergency_calls += 1;
        }

        if is_spam(call) {
            kpis.spam_calls += 1;
        } else {
            kpis.total_value += call.value_est_cents.unwrap_or(0);
        }
    }

    if kpis.total_calls > 0 {
        kpis.answer_rate = kpis.answered_calls as f64 / kpis.total_calls as f64 * 100.0;
    }
    if kpis.answered_calls > 0 {
        kpis.booking_rate = kpis.booked_jobs as f64 / kpis.answered_calls as f64 * 100.0;
        kpis.avg_call_value = kpis.total_value as f64 / kpis.answered_calls as f64;
    }

    Ok(kpis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use venlyn_domain::CallId;

    fn call(id: u128, disposition: Option<Disposition>) -> CallRecord {
        let mut record = CallRecord::new(CallId::from_value(id), 1_000);
        record.disposition = disposition;
        record
    }

    #[test]
    fn test_empty_batch_is_all_zero() {
        let kpis = compute_kpis(&[]).unwrap();
        assert_eq!(kpis, KpiData::default());
        assert_eq!(kpis.answer_rate, 0.0);
        assert_eq!(kpis.booking_rate, 0.0);
        assert_eq!(kpis.avg_call_value, 0.0);
    }

    #[test]
    fn test_headline_counts_and_answer_rate() {
        // 6 answered, 2 missed, 1 booked, 1 undetermined
        let mut calls: Vec<CallRecord> = Vec::new();
        for i in 0..6 {
            calls.push(call(i, Some(Disposition::Answered)));
        }
        calls.push(call(6, Some(Disposition::Missed)));
        calls.push(call(7, Some(Disposition::Missed)));
        calls.push(call(8, Some(Disposition::Booked)));
        calls.push(call(9, None));

        let kpis = compute_kpis(&calls).unwrap();

        assert_eq!(kpis.total_calls, 10);
        assert_eq!(kpis.answered_calls, 6);
        assert_eq!(kpis.missed_calls, 2);
        assert_eq!(kpis.booked_jobs, 1);
        assert_eq!(kpis.answer_rate, 60.0);
    }

    #[test]
    fn test_spam_by_disposition_or_score() {
        let mut by_disposition = call(1, Some(Disposition::Spam));
        by_disposition.value_est_cents = Some(5_000);

        let mut by_score = call(2, Some(Disposition::Answered));
        by_score.spam_score = Some(95);
        by_score.value_est_cents = Some(7_000);

        let mut at_threshold = call(3, Some(Disposition::Answered));
        at_threshold.spam_score = Some(80); // not above the threshold
        at_threshold.value_est_cents = Some(1_000);

        let kpis = compute_kpis(&[by_disposition, by_score, at_threshold]).unwrap();

        assert_eq!(kpis.spam_calls, 2);
        // Only the at-threshold call's value survives the spam exclusion
        assert_eq!(kpis.total_value, 1_000);
    }

    #[test]
    fn test_total_value_skips_absent_estimates() {
        let mut valued = call(1, Some(Disposition::Answered));
        valued.value_est_cents = Some(25_000);
        let unvalued = call(2, Some(Disposition::Answered));

        let kpis = compute_kpis(&[valued, unvalued]).unwrap();

        assert_eq!(kpis.total_value, 25_000);
        assert_eq!(kpis.avg_call_value, 12_500.0);
    }

    #[test]
    fn test_booking_rate_over_answered() {
        let calls = vec![
            call(1, Some(Disposition::Answered)),
            call(2, Some(Disposition::Answered)),
            call(3, Some(Disposition::Booked)),
            call(4, Some(Disposition::Missed)),
        ];

        let kpis = compute_kpis(&calls).unwrap();
        assert_eq!(kpis.booking_rate, 50.0);
    }

    #[test]
    fn test_emergency_intent_counted() {
        let mut emergency = call(1, Some(Disposition::Answered));
        emergency.intent = Some(Intent::Emergency);
        let routine = call(2, Some(Disposition::Answered));

        let kpis = compute_kpis(&[emergency, routine]).unwrap();
        assert_eq!(kpis.emergency_calls, 1);
    }

    #[test]
    fn test_bad_record_rejects_whole_batch() {
        let good = call(1, Some(Disposition::Answered));
        let mut bad = call(2, None);
        bad.spam_score = Some(150);

        let result = compute_kpis(&[good, bad]);
        assert!(matches!(result, Err(AnalyticsError::InvalidInput(_))));
    }

    #[test]
    fn test_json_field_names() {
        let kpis = compute_kpis(&[call(1, Some(Disposition::Answered))]).unwrap();
        let json = serde_json::to_value(&kpis).unwrap();

        assert_eq!(json["totalCalls"], 1);
        assert_eq!(json["answeredCalls"], 1);
        assert_eq!(json["bookedJobs"], 0);
        assert_eq!(json["totalValue"], 0);
        assert_eq!(json["answerRate"], 100.0);
        assert_eq!(json["avgCallValue"], 0.0);
    }
}
