//! Seed command implementation.

use crate::cli::SeedArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use venlyn_domain::{TimeWindow, TimestampMs};
use venlyn_fixtures::FixtureFactory;

/// Execute the seed command.
///
/// Writes `calls.json` and `tasks.json` into the output directory. The same
/// seed, counts, and --now always produce byte-identical files.
pub fn execute_seed(
    args: SeedArgs,
    config: &Config,
    formatter: &Formatter,
    now: TimestampMs,
) -> Result<()> {
    let window_days = args.window_days.unwrap_or(config.default_window_days);
    let window = TimeWindow::trailing_days(now, window_days);

    let mut factory = FixtureFactory::new(args.seed);
    let calls = factory.call_batch(args.calls, &window);
    let tasks = factory.task_batch(args.tasks, now);

    fs::create_dir_all(&args.out)?;

    let calls_path = args.out.join("calls.json");
    fs::write(&calls_path, serde_json::to_string_pretty(&calls)?)?;

    let tasks_path = args.out.join("tasks.json");
    fs::write(&tasks_path, serde_json::to_string_pretty(&tasks)?)?;

    tracing::info!(
        seed = args.seed,
        calls = calls.len(),
        tasks = tasks.len(),
        "wrote fixture files"
    );
    println!(
        "{}",
        formatter.success(&format!(
            "Wrote {} calls to {} and {} tasks to {}",
            calls.len(),
            calls_path.display(),
            tasks.len(),
            tasks_path.display()
        ))
    );

    Ok(())
}
