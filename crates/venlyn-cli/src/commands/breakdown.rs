//! Breakdown command implementation.

use crate::cli::BreakdownArgs;
use crate::error::Result;
use crate::input;
use crate::output::Formatter;
use venlyn_analytics::compute_disposition_breakdown;

/// Execute the breakdown command.
pub fn execute_breakdown(args: BreakdownArgs, formatter: &Formatter) -> Result<()> {
    let calls = input::load_calls(&args.file)?;
    let slices = compute_disposition_breakdown(&calls)?;

    tracing::info!(slices = slices.len(), "computed disposition breakdown");
    println!("{}", formatter.format_breakdown(&slices)?);

    Ok(())
}
