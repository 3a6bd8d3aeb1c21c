//! SLA timer computation
//!
//! Derives a countdown and severity bucket from a due timestamp and a
//! caller-supplied current time.

use crate::{SlaError, SlaThresholds};
use serde::{Deserialize, Serialize};
use venlyn_domain::{FollowUpTask, TaskId, TimestampMs};

/// Milliseconds in one minute
const MINUTE_MS: u64 = 60_000;

/// Severity bucket for a pending deadline
///
/// Buckets are ordered by urgency; as the due timestamp approaches, a timer
/// moves from `Ok` through `Warning` and `Critical` to `Overdue` and never
/// skips backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaStatus {
    /// Comfortably inside the SLA
    Ok,

    /// Inside the warning threshold
    Warning,

    /// Inside the critical threshold
    Critical,

    /// The due timestamp has passed
    Overdue,
}

impl SlaStatus {
    /// Urgency rank, higher is more urgent
    pub fn rank(&self) -> u8 {
        match self {
            SlaStatus::Ok => 0,
            SlaStatus::Warning => 1,
            SlaStatus::Critical => 2,
            SlaStatus::Overdue => 3,
        }
    }

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::Ok => "ok",
            SlaStatus::Warning => "warning",
            SlaStatus::Critical => "critical",
            SlaStatus::Overdue => "overdue",
        }
    }
}

/// A computed countdown for a single deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaTimer {
    /// Whole minutes remaining until the deadline, clamped at 0
    pub remaining_minutes: u64,

    /// Severity bucket
    pub status: SlaStatus,
}

/// A computed countdown attached to its follow-up task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTimer {
    /// The task this timer belongs to
    pub task_id: TaskId,

    /// Whole minutes remaining until the deadline, clamped at 0
    pub remaining_minutes: u64,

    /// Severity bucket
    pub status: SlaStatus,
}

/// Classify how urgent a deadline is at the supplied current time
///
/// `remaining_minutes` is `floor((due_at - now) in minutes)`, never
/// negative. The bucket is `Overdue` exactly when `due_at <= now`;
/// otherwise the remaining minutes are compared against the threshold
/// table. A future deadline with less than a full minute remaining buckets
/// `Critical`: urgency must be monotone as the deadline approaches, so the
/// floor of the countdown can never demote a timer below its neighbors.
///
/// # Errors
///
/// Returns [`SlaError::InvalidConfiguration`] if the threshold table
/// violates its ordering invariant. No partial result is produced.
pub fn compute_sla_status(
    due_at: TimestampMs,
    now: TimestampMs,
    thresholds: &SlaThresholds,
) -> Result<SlaTimer, SlaError> {
    thresholds.validate()?;

    if due_at <= now {
        return Ok(SlaTimer {
            remaining_minutes: 0,
            status: SlaStatus::Overdue,
        });
    }

    let remaining_minutes = (due_at - now) / MINUTE_MS;
    let status = if remaining_minutes <= thresholds.critical_minutes as u64 {
        SlaStatus::Critical
    } else if remaining_minutes <= thresholds.warning_minutes as u64 {
        SlaStatus::Warning
    } else {
        SlaStatus::Ok
    };

    Ok(SlaTimer {
        remaining_minutes,
        status,
    })
}

/// Compute timers for every open task, soonest-due first
///
/// Tasks that are already done are filtered out; their timers are
/// meaningless. Output is sorted ascending by remaining minutes with the
/// task identifier as a deterministic tie-break, so identical input and
/// identical `now` always yield an identical sequence.
pub fn collect_sla_timers(
    tasks: &[FollowUpTask],
    now: TimestampMs,
    thresholds: &SlaThresholds,
) -> Result<Vec<TaskTimer>, SlaError> {
    thresholds.validate()?;

    let mut timers: Vec<TaskTimer> = Vec::new();
    for task in tasks.iter().filter(|t| t.is_open()) {
        let timer = compute_sla_status(task.due_at, now, thresholds)?;
        timers.push(TaskTimer {
            task_id: task.id,
            remaining_minutes: timer.remaining_minutes,
            status: timer.status,
        });
    }

    timers.sort_by(|a, b| {
        a.remaining_minutes
            .cmp(&b.remaining_minutes)
            .then(a.task_id.cmp(&b.task_id))
    });

    Ok(timers)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use venlyn_domain::FollowUpTask;

    const NOW: TimestampMs = 1_700_000_000_000;

    proptest! {
        /// Property: any deadline at or before now is overdue with zero remaining
        #[test]
        fn test_past_deadlines_overdue(offset_ms in 0u64..10 * 24 * 3_600_000) {
            let thresholds = SlaThresholds::default();
            let timer = compute_sla_status(NOW - offset_ms, NOW, &thresholds).unwrap();

            prop_assert_eq!(timer.status, SlaStatus::Overdue);
            prop_assert_eq!(timer.remaining_minutes, 0);
        }

        /// Property: urgency never decreases as the deadline approaches
        #[test]
        fn test_urgency_monotone_in_time(
            due_offset_ms in 0u64..7 * 24 * 3_600_000,
            step_ms in 0u64..24 * 3_600_000,
        ) {
            let thresholds = SlaThresholds::default();
            let due_at = NOW + due_offset_ms;

            let earlier = compute_sla_status(due_at, NOW, &thresholds).unwrap();
            let later = compute_sla_status(due_at, NOW + step_ms, &thresholds).unwrap();

            prop_assert!(later.status.rank() >= earlier.status.rank(),
                "urgency regressed from {:?} to {:?}", earlier.status, later.status);
            prop_assert!(later.remaining_minutes <= earlier.remaining_minutes);
        }

        /// Property: collected timers match the open-task count and stay sorted
        #[test]
        fn test_collect_length_and_order(offsets in prop::collection::vec(0u64..10_000u64, 0..40)) {
            let thresholds = SlaThresholds::default();
            let tasks: Vec<FollowUpTask> = offsets
                .iter()
                .enumerate()
                .map(|(i, &off)| FollowUpTask::new(TaskId::from_value(i as u128), NOW + off * 1_000))
                .collect();

            let timers = collect_sla_timers(&tasks, NOW, &thresholds).unwrap();

            prop_assert_eq!(timers.len(), tasks.len());
            for pair in timers.windows(2) {
                prop_assert!(pair[0].remaining_minutes <= pair[1].remaining_minutes);
            }
        }
    }
}
