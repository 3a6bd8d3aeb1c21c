//! Series command implementation.

use crate::cli::SeriesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use venlyn_analytics::{compute_time_series, utc_day};
use venlyn_domain::TimestampMs;

/// Execute the series command.
pub fn execute_series(
    args: SeriesArgs,
    config: &Config,
    formatter: &Formatter,
    now: TimestampMs,
) -> Result<()> {
    let window_days = args.window_days.unwrap_or(config.default_window_days);
    let calls = input::load_calls(&args.file)?;

    let series = compute_time_series(&calls, window_days, now, utc_day)?;

    tracing::info!(window_days, points = series.len(), "computed daily series");
    println!("{}", formatter.format_series(&series)?);

    Ok(())
}
