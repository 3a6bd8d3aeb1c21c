//! Command implementations.

mod breakdown;
mod kpis;
mod seed;
mod series;
mod sla;
mod trend;

pub use breakdown::execute_breakdown;
pub use kpis::execute_kpis;
pub use seed::execute_seed;
pub use series::execute_series;
pub use sla::execute_sla;
pub use trend::execute_trend;

use std::time::{SystemTime, UNIX_EPOCH};
use venlyn_domain::TimestampMs;

/// Resolve the effective "now" for a run.
///
/// The engines never read a clock; the binary resolves it exactly once
/// here, preferring an explicit `--now` so runs can be replayed.
pub fn resolve_now(override_ms: Option<u64>) -> TimestampMs {
    override_ms.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_now_wins() {
        assert_eq!(resolve_now(Some(1_234)), 1_234);
    }

    #[test]
    fn test_clock_now_is_recent() {
        // Anything after 2020 is plausible for a real clock
        assert!(resolve_now(None) > 1_577_836_800_000);
    }
}
