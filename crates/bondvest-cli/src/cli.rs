//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{PortfolioArgs, ScheduleArgs, StatusArgs, ValueArgs};

/// Bondvest - investment value, status and portfolio totals
#[derive(Parser)]
#[command(name = "bondvest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// Aggregation and accrual settings (JSON)
    #[arg(short, long, global = true, env = "BONDVEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log computation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the as-of time comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct ClockArgs {
    /// Evaluate at this ISO-8601 time instead of now
    #[arg(long, global = true, conflicts_with = "offset_days")]
    pub as_of: Option<String>,

    /// Shift the wall clock by this many days (negative for the past)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset_days: Option<i64>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Current value and earnings of each investment
    Value(ValueArgs),

    /// Lifecycle status, flags and key dates
    Status(StatusArgs),

    /// Portfolio totals and earnings history
    Portfolio(PortfolioArgs),

    /// Monthly accrual schedule and withdrawal payout estimate
    Schedule(ScheduleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
