//! Trend command implementation.

use crate::cli::TrendArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use venlyn_analytics::compute_kpi_trend;
use venlyn_domain::TimestampMs;

/// Execute the trend command.
pub fn execute_trend(
    args: TrendArgs,
    config: &Config,
    formatter: &Formatter,
    now: TimestampMs,
) -> Result<()> {
    let window_days = args.window_days.unwrap_or(config.default_window_days);
    let calls = input::load_calls(&args.file)?;

    let trend = compute_kpi_trend(&calls, now, window_days)?;

    tracing::info!(
        window_days,
        current = trend.current.total_calls,
        previous = trend.previous.total_calls,
        "computed KPI trend"
    );
    println!("{}", formatter.format_trend(&trend)?);

    Ok(())
}
