//! Kpis command implementation.

use crate::cli::KpisArgs;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use venlyn_analytics::compute_kpis;

/// Execute the kpis command.
pub fn execute_kpis(args: KpisArgs, formatter: &Formatter) -> Result<()> {
    let calls = input::load_calls(&args.file)?;
    let kpis = compute_kpis(&calls)?;

    tracing::info!(total_calls = kpis.total_calls, "computed headline KPIs");
    println!("{}", formatter.format_kpis(&kpis)?);

    Ok(())
}
