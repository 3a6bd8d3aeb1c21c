//! Daily time series computation
//!
//! Buckets calls into calendar days for the volume chart. The chart assumes
//! a fixed-length, gap-free array, so every day in range is emitted even
//! when it saw zero calls.

use crate::kpis::validate_batch;
use crate::AnalyticsError;
use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use venlyn_domain::{CallRecord, Disposition, TimestampMs};

/// Call volume for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    /// The calendar day (serializes as `YYYY-MM-DD`)
    pub date: NaiveDate,

    /// All calls that started this day
    pub total: u64,

    /// Calls with an `answered` disposition
    pub answered: u64,

    /// Calls with a `missed` disposition
    pub missed: u64,
}

impl DailyPoint {
    fn zero(date: NaiveDate) -> Self {
        Self {
            date,
            total: 0,
            answered: 0,
            missed: 0,
        }
    }
}

/// Bucket a timestamp into its UTC calendar day
///
/// The default day boundary. Callers with a local-time dashboard pass their
/// own bucketing function instead. Timestamps outside chrono's
/// representable range collapse to the epoch day; such values cannot come
/// from real call records.
pub fn utc_day(ts: TimestampMs) -> NaiveDate {
    DateTime::from_timestamp_millis(ts as i64)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Bucket calls into one point per day over the trailing window
///
/// Produces exactly `window_days` points, one per calendar day from
/// `day_of(now) - window_days + 1` through `day_of(now)` inclusive, in
/// ascending date order and pre-seeded with zeros. `day_of` supplies the
/// caller's notion of a calendar day; [`utc_day`] is the usual choice.
/// Calls whose start date falls outside the range are ignored.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidConfiguration`] when `window_days` is
/// zero or the range leaves the representable calendar, and
/// [`AnalyticsError::InvalidInput`] when any record fails its invariant
/// check.
pub fn compute_time_series<F>(
    calls: &[CallRecord],
    window_days: u32,
    now: TimestampMs,
    day_of: F,
) -> Result<Vec<DailyPoint>, AnalyticsError>
where
    F: Fn(TimestampMs) -> NaiveDate,
{
    if window_days == 0 {
        return Err(AnalyticsError::InvalidConfiguration(
            "window_days must be at least 1".to_string(),
        ));
    }
    validate_batch(calls)?;

    let end_day = day_of(now);
    let start_day = end_day
        .checked_sub_days(Days::new(window_days as u64 - 1))
        .ok_or_else(|| {
            AnalyticsError::InvalidConfiguration(format!(
                "window of {} days starting {} leaves the calendar",
                window_days, end_day
            ))
        })?;

    let mut points: BTreeMap<NaiveDate, DailyPoint> = BTreeMap::new();
    for offset in 0..window_days {
        let date = start_day
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| {
                AnalyticsError::InvalidConfiguration("window leaves the calendar".to_string())
            })?;
        points.insert(date, DailyPoint::zero(date));
    }

    for call in calls {
        let date = day_of(call.started_at);
        if let Some(point) = points.get_mut(&date) {
            point.total += 1;
            match call.disposition {
                Some(Disposition::Answered) => point.answered += 1,
                Some(Disposition::Missed) => point.missed += 1,
                _ => {}
            }
        }
    }

    Ok(points.into_values().collect())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use venlyn_domain::window::DAY_MS;
    use venlyn_domain::CallId;

    const NOW: TimestampMs = 100 * DAY_MS;

    proptest! {
        /// Property: output length always equals the window, however sparse
        /// the calls, and in-window totals are conserved
        #[test]
        fn test_length_and_conservation(
            window_days in 1u32..90,
            starts in prop::collection::vec(0u64..200 * DAY_MS, 0..80),
        ) {
            let calls: Vec<CallRecord> = starts
                .iter()
                .enumerate()
                .map(|(i, &ts)| CallRecord::new(CallId::from_value(i as u128), ts))
                .collect();

            let series = compute_time_series(&calls, window_days, NOW, utc_day).unwrap();

            prop_assert_eq!(series.len(), window_days as usize);

            let first_day = series[0].date;
            let last_day = series[series.len() - 1].date;
            let expected: u64 = calls
                .iter()
                .filter(|c| {
                    let d = utc_day(c.started_at);
                    d >= first_day && d <= last_day
                })
                .count() as u64;
            let total: u64 = series.iter().map(|p| p.total).sum();

            prop_assert_eq!(total, expected);
        }
    }
}
