//! Disposition breakdown computation
//!
//! Groups calls by outcome for the donut chart. Records without a
//! disposition are excluded from both the numerator and the denominator,
//! not merely hidden from the output.

use crate::kpis::validate_batch;
use crate::AnalyticsError;
use serde::{Deserialize, Serialize};
use venlyn_domain::{CallRecord, Disposition};

/// One disposition's share of the classified calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispositionSlice {
    /// The outcome this slice counts
    pub disposition: Disposition,

    /// Calls with this disposition
    pub count: u64,

    /// `count / calls-with-a-disposition * 100`
    pub percentage: f64,
}

/// Group calls by disposition with percentages
///
/// Slices appear in order of first appearance in the input, which makes the
/// output deterministic for identical input without imposing a load-bearing
/// sort order. An input with no classified calls yields an empty vector.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] if any record fails its
/// invariant check; the batch is rejected whole.
pub fn compute_disposition_breakdown(
    calls: &[CallRecord],
) -> Result<Vec<DispositionSlice>, AnalyticsError> {
    validate_batch(calls)?;

    // First-appearance order; the disposition set is small enough that a
    // linear scan beats a map here.
    let mut groups: Vec<(Disposition, u64)> = Vec::new();
    for call in calls {
        let Some(disposition) = call.disposition else {
            continue;
        };
        match groups.iter_mut().find(|(d, _)| *d == disposition) {
            Some((_, count)) => *count += 1,
            None => groups.push((disposition, 1)),
        }
    }

    let classified: u64 = groups.iter().map(|(_, count)| count).sum();
    let slices = groups
        .into_iter()
        .map(|(disposition, count)| DispositionSlice {
            disposition,
            count,
            percentage: count as f64 / classified as f64 * 100.0,
        })
        .collect();

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use venlyn_domain::CallId;

    fn call(id: u128, disposition: Option<Disposition>) -> CallRecord {
        let mut record = CallRecord::new(CallId::from_value(id), 0);
        record.disposition = disposition;
        record
    }

    #[test]
    fn test_empty_input_yields_empty_breakdown() {
        assert!(compute_disposition_breakdown(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unclassified_calls_fully_excluded() {
        let calls = vec![
            call(1, Some(Disposition::Answered)),
            call(2, None),
            call(3, Some(Disposition::Answered)),
            call(4, None),
        ];

        let slices = compute_disposition_breakdown(&calls).unwrap();

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].count, 2);
        // Denominator is classified calls (2), not all calls (4)
        assert_eq!(slices[0].percentage, 100.0);
    }

    #[test]
    fn test_first_appearance_order() {
        let calls = vec![
            call(1, Some(Disposition::Missed)),
            call(2, Some(Disposition::Answered)),
            call(3, Some(Disposition::Missed)),
            call(4, Some(Disposition::Booked)),
        ];

        let slices = compute_disposition_breakdown(&calls).unwrap();

        let order: Vec<Disposition> = slices.iter().map(|s| s.disposition).collect();
        assert_eq!(
            order,
            vec![Disposition::Missed, Disposition::Answered, Disposition::Booked]
        );
        assert_eq!(slices[0].count, 2);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let calls = vec![
            call(1, Some(Disposition::Answered)),
            call(2, Some(Disposition::Missed)),
            call(3, Some(Disposition::Booked)),
        ];

        let slices = compute_disposition_breakdown(&calls).unwrap();

        let sum: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_slice_json_shape() {
        let slices = compute_disposition_breakdown(&[call(1, Some(Disposition::Booked))]).unwrap();
        let json = serde_json::to_value(&slices[0]).unwrap();

        assert_eq!(json["disposition"], "booked");
        assert_eq!(json["count"], 1);
        assert_eq!(json["percentage"], 100.0);
    }
}
