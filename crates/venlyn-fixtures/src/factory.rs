//! Seed-parameterized fixture factory

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use venlyn_domain::{
    CallId, CallRecord, Disposition, FollowUpTask, Intent, TaskId, TaskPriority, TaskStatus,
    TimeWindow, TimestampMs,
};

/// Generates plausible call and task batches from an explicit seed
///
/// Every generated record satisfies its domain invariants, so a fixture
/// batch always passes the engines' validation. Identifiers are drawn from
/// the seeded generator rather than the clock, keeping whole batches
/// byte-for-byte reproducible.
///
/// # Examples
///
/// ```
/// use venlyn_domain::TimeWindow;
/// use venlyn_fixtures::FixtureFactory;
///
/// let window = TimeWindow::trailing_days(1_700_000_000_000, 7);
/// let a = FixtureFactory::new(42).call_batch(20, &window);
/// let b = FixtureFactory::new(42).call_batch(20, &window);
/// assert_eq!(a, b);
/// ```
pub struct FixtureFactory {
    rng: StdRng,
}

impl FixtureFactory {
    /// Create a factory for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `n` call records starting inside the window
    ///
    /// The disposition mix approximates a real answering desk: mostly
    /// answered, some missed, a steady trickle of bookings and spam, and a
    /// few calls the AI has not classified yet.
    pub fn call_batch(&mut self, n: usize, window: &TimeWindow) -> Vec<CallRecord> {
        (0..n).map(|_| self.call(window)).collect()
    }

    /// Generate `n` follow-up tasks due around `now`
    ///
    /// Roughly a quarter are already done; open tasks are due anywhere from
    /// two hours ago to two days out, so a batch exercises every severity
    /// bucket.
    pub fn task_batch(&mut self, n: usize, now: TimestampMs) -> Vec<FollowUpTask> {
        (0..n).map(|_| self.task(now)).collect()
    }

    fn call(&mut self, window: &TimeWindow) -> CallRecord {
        let started_at = if window.len_ms() == 0 {
            window.from
        } else {
            self.rng.gen_range(window.from..window.to)
        };

        let mut record = CallRecord::new(CallId::from_value(self.rng.gen()), started_at);

        record.disposition = match self.rng.gen_range(0..100) {
            0..=44 => Some(Disposition::Answered),
            45..=64 => Some(Disposition::Missed),
            65..=79 => Some(Disposition::Booked),
            80..=89 => Some(Disposition::Callback),
            90..=94 => Some(Disposition::Spam),
            _ => None,
        };

        let spam = record.disposition == Some(Disposition::Spam);
        record.intent = if spam {
            Some(Intent::Spam)
        } else {
            match self.rng.gen_range(0..100) {
                0..=9 => Some(Intent::Emergency),
                10..=49 => Some(Intent::Routine),
                50..=69 => Some(Intent::Quote),
                70..=79 => Some(Intent::Faq),
                80..=89 => Some(Intent::Billing),
                _ => None,
            }
        };

        if record.disposition.is_some() {
            let duration = self.rng.gen_range(20u32..900);
            record.duration_secs = Some(duration);
            record.ended_at = Some(started_at + duration as u64 * 1_000);
        }

        if !spam && record.disposition.is_some() {
            record.value_est_cents = Some(self.rng.gen_range(5_000..250_000));
        }

        record.emergency_score = Some(if record.intent == Some(Intent::Emergency) {
            self.rng.gen_range(70..=100)
        } else {
            self.rng.gen_range(0..30)
        });
        record.spam_score = Some(if spam {
            self.rng.gen_range(81..=100)
        } else {
            self.rng.gen_range(0..40)
        });

        record
    }

    fn task(&mut self, now: TimestampMs) -> FollowUpTask {
        const HOUR_MS: u64 = 3_600_000;

        // -2h .. +48h around now
        let offset = self.rng.gen_range(0..50 * HOUR_MS);
        let due_at = (now + offset).saturating_sub(2 * HOUR_MS);

        let mut task = FollowUpTask::new(TaskId::from_value(self.rng.gen()), due_at);
        task.status = if self.rng.gen_bool(0.25) {
            TaskStatus::Done
        } else {
            TaskStatus::Open
        };
        task.priority = match self.rng.gen_range(0..100) {
            0..=29 => TaskPriority::Low,
            30..=69 => TaskPriority::Normal,
            70..=89 => TaskPriority::High,
            _ => TaskPriority::Urgent,
        };
        task
    }
}
