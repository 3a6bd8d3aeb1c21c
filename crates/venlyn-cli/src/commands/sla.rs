//! Sla command implementation.

use crate::cli::SlaArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input;
use crate::output::Formatter;
use venlyn_domain::TimestampMs;
use venlyn_sla::{collect_sla_timers, SlaThresholds};

/// Execute the sla command.
pub fn execute_sla(
    args: SlaArgs,
    config: &Config,
    formatter: &Formatter,
    now: TimestampMs,
) -> Result<()> {
    let thresholds = resolve_thresholds(&args, config)?;
    let tasks = input::load_tasks(&args.file)?;

    let timers = collect_sla_timers(&tasks, now, &thresholds)?;

    tracing::info!(
        open_tasks = timers.len(),
        warning_minutes = thresholds.warning_minutes,
        critical_minutes = thresholds.critical_minutes,
        "computed SLA timers"
    );
    println!("{}", formatter.format_timers(&timers)?);

    Ok(())
}

/// Per-flag overrides fall back to the configured table field by field, and
/// the merged result is validated as a whole. A bad merge is the operator's
/// input, not an engine failure, so it surfaces as invalid input.
fn resolve_thresholds(args: &SlaArgs, config: &Config) -> Result<SlaThresholds> {
    let warning = args
        .warning_minutes
        .unwrap_or(config.thresholds.warning_minutes);
    let critical = args
        .critical_minutes
        .unwrap_or(config.thresholds.critical_minutes);
    SlaThresholds::new(warning, critical)
        .map_err(|e| CliError::InvalidInput(format!("threshold overrides: {}", e)))
}
