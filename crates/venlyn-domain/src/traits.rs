//! Trait definitions for external interactions
//!
//! These traits define the boundary between the engines and the persistence
//! layer. The engines never query storage themselves; page-level loaders
//! fetch through these traits and hand the engines already-materialized
//! collections.

use crate::{CallRecord, FollowUpTask, TimeWindow, TimestampMs};

/// Trait for fetching call records
///
/// Implemented by the infrastructure layer; an in-memory implementation
/// lives in `venlyn-fixtures` for tests and seeding.
pub trait CallFeed {
    /// Error type for feed operations
    type Error;

    /// Fetch calls whose start timestamp falls inside the window
    fn calls_in(&self, window: &TimeWindow) -> Result<Vec<CallRecord>, Self::Error>;
}

/// Trait for fetching follow-up tasks
pub trait TaskFeed {
    /// Error type for feed operations
    type Error;

    /// Fetch every task that is still open
    fn open_tasks(&self) -> Result<Vec<FollowUpTask>, Self::Error>;

    /// Fetch open tasks due before the cutoff
    fn tasks_due_before(&self, cutoff: TimestampMs) -> Result<Vec<FollowUpTask>, Self::Error>;
}
