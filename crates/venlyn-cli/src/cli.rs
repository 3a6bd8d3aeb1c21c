//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Venlyn CLI - Run the call-center analytics and SLA engines from files.
#[derive(Debug, Parser)]
#[command(name = "venlyn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override "now" (epoch milliseconds) for reproducible runs
    #[arg(long, global = true)]
    pub now: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact JSON, one document per line
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute headline KPIs over a call file
    Kpis(KpisArgs),

    /// Compare the trailing window against the previous one
    Trend(TrendArgs),

    /// Bucket calls into a daily time series
    Series(SeriesArgs),

    /// Group calls by disposition with percentages
    Breakdown(BreakdownArgs),

    /// Compute SLA timers for open follow-up tasks
    Sla(SlaArgs),

    /// Write deterministic fixture files
    Seed(SeedArgs),
}

/// Arguments for the kpis command.
#[derive(Debug, Parser)]
pub struct KpisArgs {
    /// JSON file containing an array of call records
    #[arg(short = 'f', long)]
    pub file: PathBuf,
}

/// Arguments for the trend command.
#[derive(Debug, Parser)]
pub struct TrendArgs {
    /// JSON file containing an array of call records
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Window length in days (defaults from config)
    #[arg(short, long)]
    pub window_days: Option<u32>,
}

/// Arguments for the series command.
#[derive(Debug, Parser)]
pub struct SeriesArgs {
    /// JSON file containing an array of call records
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Window length in days (defaults from config)
    #[arg(short, long)]
    pub window_days: Option<u32>,
}

/// Arguments for the breakdown command.
#[derive(Debug, Parser)]
pub struct BreakdownArgs {
    /// JSON file containing an array of call records
    #[arg(short = 'f', long)]
    pub file: PathBuf,
}

/// Arguments for the sla command.
#[derive(Debug, Parser)]
pub struct SlaArgs {
    /// JSON file containing an array of follow-up tasks
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Warning threshold in minutes (defaults from config)
    #[arg(short = 'w', long)]
    pub warning_minutes: Option<u32>,

    /// Critical threshold in minutes (defaults from config)
    #[arg(short = 'c', long)]
    pub critical_minutes: Option<u32>,
}

/// Arguments for the seed command.
#[derive(Debug, Parser)]
pub struct SeedArgs {
    /// Number of call records to generate
    #[arg(long, default_value = "100")]
    pub calls: usize,

    /// Number of follow-up tasks to generate
    #[arg(long, default_value = "25")]
    pub tasks: usize,

    /// Generator seed; the same seed always produces the same files
    #[arg(short, long, default_value = "42")]
    pub seed: u64,

    /// Spread generated calls over this many trailing days
    #[arg(short, long)]
    pub window_days: Option<u32>,

    /// Directory to write calls.json and tasks.json into
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
