//! Time window module - the half-open interval scoping every aggregation

/// Timestamp in milliseconds since the Unix epoch
///
/// All timestamps in the domain use this representation; the current time
/// is always supplied by the caller, never read from a global clock.
pub type TimestampMs = u64;

/// Milliseconds in one calendar day
pub const DAY_MS: u64 = 86_400_000;

/// A half-open interval `[from, to)` used to scope aggregation
///
/// Invariant: `from <= to`. Construction validates the invariant so a
/// window can never describe a negative span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive start (epoch milliseconds)
    pub from: TimestampMs,

    /// Exclusive end (epoch milliseconds)
    pub to: TimestampMs,
}

impl TimeWindow {
    /// Create a window, rejecting `from > to`
    pub fn new(from: TimestampMs, to: TimestampMs) -> Result<Self, String> {
        if from > to {
            return Err(format!("invalid window: from {} exceeds to {}", from, to));
        }
        Ok(Self { from, to })
    }

    /// The trailing window of `days` calendar days ending at `now`
    ///
    /// `now` is exclusive, matching the half-open convention. Saturates at
    /// the epoch if `now` is closer to it than the requested span.
    pub fn trailing_days(now: TimestampMs, days: u32) -> Self {
        let span = days as u64 * DAY_MS;
        Self {
            from: now.saturating_sub(span),
            to: now,
        }
    }

    /// Whether a timestamp falls inside the window
    pub fn contains(&self, ts: TimestampMs) -> bool {
        ts >= self.from && ts < self.to
    }

    /// Length of the window in milliseconds
    pub fn len_ms(&self) -> u64 {
        self.to - self.from
    }

    /// The contiguous window of equal length ending where this one starts
    ///
    /// Used for period-over-period comparisons: `[from - len, from)`.
    pub fn preceding(&self) -> Self {
        Self {
            from: self.from.saturating_sub(self.len_ms()),
            to: self.from,
        }
    }
}
