//! Venlyn CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use venlyn_cli::{commands, Cli, Command, Config, Formatter, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = config.settings.color && !cli.no_color;
    let formatter = Formatter::new(format, color_enabled);

    // The single place the wall clock is consulted
    let now = commands::resolve_now(cli.now);

    match cli.command {
        Command::Kpis(args) => commands::execute_kpis(args, &formatter),
        Command::Trend(args) => commands::execute_trend(args, &config, &formatter, now),
        Command::Series(args) => commands::execute_series(args, &config, &formatter, now),
        Command::Breakdown(args) => commands::execute_breakdown(args, &formatter),
        Command::Sla(args) => commands::execute_sla(args, &config, &formatter, now),
        Command::Seed(args) => commands::execute_seed(args, &config, &formatter, now),
    }
}
