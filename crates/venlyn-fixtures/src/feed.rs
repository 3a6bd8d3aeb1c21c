//! In-memory implementation of the domain feed traits

use std::convert::Infallible;
use venlyn_domain::traits::{CallFeed, TaskFeed};
use venlyn_domain::{CallRecord, FollowUpTask, TimeWindow, TimestampMs};

/// An in-memory feed over already-materialized records
///
/// Stands in for the persistence layer wherever the engines are exercised
/// without a database: integration tests, the CLI, and examples.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeed {
    calls: Vec<CallRecord>,
    tasks: Vec<FollowUpTask>,
}

impl InMemoryFeed {
    /// Create a feed over the given records
    pub fn new(calls: Vec<CallRecord>, tasks: Vec<FollowUpTask>) -> Self {
        Self { calls, tasks }
    }

    /// Number of call records held
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of tasks held
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl CallFeed for InMemoryFeed {
    type Error = Infallible;

    fn calls_in(&self, window: &TimeWindow) -> Result<Vec<CallRecord>, Self::Error> {
        Ok(self
            .calls
            .iter()
            .filter(|c| window.contains(c.started_at))
            .cloned()
            .collect())
    }
}

impl TaskFeed for InMemoryFeed {
    type Error = Infallible;

    fn open_tasks(&self) -> Result<Vec<FollowUpTask>, Self::Error> {
        Ok(self.tasks.iter().filter(|t| t.is_open()).cloned().collect())
    }

    fn tasks_due_before(&self, cutoff: TimestampMs) -> Result<Vec<FollowUpTask>, Self::Error> {
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.is_open() && t.due_at < cutoff)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixtureFactory;

    const NOW: TimestampMs = 1_700_000_000_000;

    #[test]
    fn test_calls_in_respects_window() {
        let window = TimeWindow::trailing_days(NOW, 30);
        let calls = FixtureFactory::new(11).call_batch(40, &window);
        let feed = InMemoryFeed::new(calls, Vec::new());

        let inner = TimeWindow::trailing_days(NOW, 7);
        let fetched = feed.calls_in(&inner).unwrap();

        assert!(fetched.iter().all(|c| inner.contains(c.started_at)));
        assert!(fetched.len() <= feed.call_count());
    }

    #[test]
    fn test_open_tasks_filters_done() {
        let tasks = FixtureFactory::new(11).task_batch(40, NOW);
        let feed = InMemoryFeed::new(Vec::new(), tasks);

        let open = feed.open_tasks().unwrap();
        assert!(open.iter().all(|t| t.is_open()));
    }

    #[test]
    fn test_tasks_due_before_cutoff() {
        let tasks = FixtureFactory::new(11).task_batch(40, NOW);
        let feed = InMemoryFeed::new(Vec::new(), tasks);

        let due_soon = feed.tasks_due_before(NOW).unwrap();
        assert!(due_soon.iter().all(|t| t.due_at < NOW && t.is_open()));
    }
}
