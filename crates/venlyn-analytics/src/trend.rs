//! Period-over-period KPI trend
//!
//! Compares the trailing window against the equally long window before it.

use crate::kpis::{compute_kpis, validate_batch, KpiData};
use crate::AnalyticsError;
use serde::{Deserialize, Serialize};
use venlyn_domain::{CallRecord, TimeWindow, TimestampMs};

/// KPIs for the current window alongside the previous one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTrend {
    /// Aggregates over `[now - window, now)`
    pub current: KpiData,

    /// Aggregates over `[now - 2*window, now - window)`
    pub previous: KpiData,
}

impl KpiTrend {
    /// Change in call volume between the periods
    pub fn total_calls_delta(&self) -> i64 {
        self.current.total_calls as i64 - self.previous.total_calls as i64
    }

    /// Change in answer rate, in percentage points
    pub fn answer_rate_delta(&self) -> f64 {
        self.current.answer_rate - self.previous.answer_rate
    }

    /// Change in booking rate, in percentage points
    pub fn booking_rate_delta(&self) -> f64 {
        self.current.booking_rate - self.previous.booking_rate
    }

    /// Change in total value, in cents
    pub fn total_value_delta(&self) -> i64 {
        self.current.total_value as i64 - self.previous.total_value as i64
    }
}

/// Compute KPIs for the trailing window and the window before it
///
/// The two periods are contiguous, non-overlapping, and of equal length by
/// construction: `[now - w, now)` and `[now - 2w, now - w)`. Records
/// outside both windows are ignored; the caller may pass a pre-filtered
/// list or the whole workspace history.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidConfiguration`] when `window_days` is
/// zero and [`AnalyticsError::InvalidInput`] when any record in the batch
/// fails its invariant check.
pub fn compute_kpi_trend(
    calls: &[CallRecord],
    now: TimestampMs,
    window_days: u32,
) -> Result<KpiTrend, AnalyticsError> {
    if window_days == 0 {
        return Err(AnalyticsError::InvalidConfiguration(
            "window_days must be at least 1".to_string(),
        ));
    }
    validate_batch(calls)?;

    let current_window = TimeWindow::trailing_days(now, window_days);
    let previous_window = current_window.preceding();

    let mut current: Vec<CallRecord> = Vec::new();
    let mut previous: Vec<CallRecord> = Vec::new();
    for call in calls {
        if current_window.contains(call.started_at) {
            current.push(call.clone());
        } else if previous_window.contains(call.started_at) {
            previous.push(call.clone());
        }
    }

    Ok(KpiTrend {
        current: compute_kpis(&current)?,
        previous: compute_kpis(&previous)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use venlyn_domain::window::DAY_MS;
    use venlyn_domain::{CallId, Disposition};

    const NOW: TimestampMs = 100 * DAY_MS;

    fn call_at(id: u128, started_at: TimestampMs, disposition: Disposition) -> CallRecord {
        let mut record = CallRecord::new(CallId::from_value(id), started_at);
        record.disposition = Some(disposition);
        record
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = compute_kpi_trend(&[], NOW, 0);
        assert!(matches!(result, Err(AnalyticsError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_calls_partition_into_periods() {
        let calls = vec![
            // Current week
            call_at(1, NOW - DAY_MS, Disposition::Answered),
            call_at(2, NOW - 2 * DAY_MS, Disposition::Booked),
            // Previous week
            call_at(3, NOW - 8 * DAY_MS, Disposition::Missed),
            // Older than both windows
            call_at(4, NOW - 20 * DAY_MS, Disposition::Answered),
        ];

        let trend = compute_kpi_trend(&calls, NOW, 7).unwrap();

        assert_eq!(trend.current.total_calls, 2);
        assert_eq!(trend.previous.total_calls, 1);
        assert_eq!(trend.previous.missed_calls, 1);
    }

    #[test]
    fn test_boundary_call_belongs_to_current_period() {
        // Exactly at now - window: first instant of the current period
        let calls = vec![call_at(1, NOW - 7 * DAY_MS, Disposition::Answered)];

        let trend = compute_kpi_trend(&calls, NOW, 7).unwrap();

        assert_eq!(trend.current.total_calls, 1);
        assert_eq!(trend.previous.total_calls, 0);
    }

    #[test]
    fn test_deltas() {
        let calls = vec![
            call_at(1, NOW - DAY_MS, Disposition::Answered),
            call_at(2, NOW - DAY_MS, Disposition::Answered),
            call_at(3, NOW - 8 * DAY_MS, Disposition::Missed),
        ];

        let trend = compute_kpi_trend(&calls, NOW, 7).unwrap();

        assert_eq!(trend.total_calls_delta(), 1);
        assert_eq!(trend.answer_rate_delta(), 100.0);
        assert_eq!(trend.total_value_delta(), 0);
    }

    #[test]
    fn test_json_shape() {
        let trend = compute_kpi_trend(&[], NOW, 7).unwrap();
        let json = serde_json::to_value(&trend).unwrap();

        assert!(json["current"]["totalCalls"].is_u64());
        assert!(json["previous"]["answerRate"].is_f64() || json["previous"]["answerRate"].is_u64());
    }
}
