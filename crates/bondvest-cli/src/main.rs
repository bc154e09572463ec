//! Bondvest CLI - value, status and portfolio totals from an investment file.
//!
//! # Usage
//!
//! ```bash
//! # Value every investment now
//! bondvest value investments.json
//!
//! # Status at a fixed time
//! bondvest status investments.json --as-of 2025-06-15T12:00:00Z
//!
//! # Portfolio totals three months from now, as JSON
//! bondvest portfolio investments.json --offset-days 90 --format json
//!
//! # Accrual schedule and payout estimate for one investment
//! bondvest schedule investments.json --id INV-1
//! ```
//!
//! Set `RUST_LOG` (for example `RUST_LOG=bondvest_accrual=debug`) to see
//! per-investment computation logs on stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::new(cli.format, &cli.clock, cli.config.as_deref())?;

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, &ctx)?,
        Commands::Status(args) => commands::status::execute(args, &ctx)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
    }

    Ok(())
}
