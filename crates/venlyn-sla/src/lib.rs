//! Venlyn SLA Engine
//!
//! Classifies how urgent a pending deadline is right now, producing a
//! remaining-minutes value and a severity bucket from a configurable
//! threshold table.
//!
//! The engine provides:
//! - Severity bucketing (ok / warning / critical / overdue)
//! - Remaining time computation, clamped at zero
//! - Sorted timer collection over open follow-up tasks
//!
//! Both entry points are pure: the current time is a parameter, never a
//! clock read, so a given `(due_at, now, thresholds)` triple always yields
//! the same answer. Callers re-invoke on their own refresh cadence; the
//! engine manages no timers of its own.
//!
//! # Examples
//!
//! ```
//! use venlyn_sla::{compute_sla_status, SlaStatus, SlaThresholds};
//!
//! let thresholds = SlaThresholds::default();
//! let now = 1_000_000;
//! let due = now + 45 * 60_000;
//!
//! let timer = compute_sla_status(due, now, &thresholds).unwrap();
//! assert_eq!(timer.remaining_minutes, 45);
//! assert_eq!(timer.status, SlaStatus::Warning);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod timer;

pub use config::SlaThresholds;
pub use error::SlaError;
pub use timer::{collect_sla_timers, compute_sla_status, SlaStatus, SlaTimer, TaskTimer};
