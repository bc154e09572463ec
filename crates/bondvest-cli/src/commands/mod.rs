//! CLI command implementations.

pub mod portfolio;
pub mod schedule;
pub mod status;
pub mod value;

pub use portfolio::PortfolioArgs;
pub use schedule::ScheduleArgs;
pub use status::StatusArgs;
pub use value::ValueArgs;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Duration;
use serde::de::DeserializeOwned;
use tracing::debug;

use bondvest_core::prelude::*;
use bondvest_portfolio::AggregationConfig;

use crate::cli::{ClockArgs, OutputFormat};
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// The instant all figures are computed at.
    pub as_of: AsOf,
    /// Aggregation and accrual settings.
    pub config: AggregationConfig,
}

impl Context {
    /// Resolves the as-of time and loads configuration.
    pub fn new(format: OutputFormat, clock: &ClockArgs, config: Option<&Path>) -> Result<Self> {
        let as_of = resolve_as_of(clock)?;
        let config = match config {
            Some(path) => read_json(path)?,
            None => AggregationConfig::default(),
        };
        debug!(%as_of, ?config, "Resolved command context");
        Ok(Self {
            format,
            as_of,
            config,
        })
    }
}

/// Picks the as-of time: explicit, simulated or wall clock.
pub fn resolve_as_of(clock: &ClockArgs) -> Result<AsOf> {
    if let Some(ref iso) = clock.as_of {
        return Ok(AsOf::parse(iso)?);
    }
    let source: Box<dyn TimeSource> = match clock.offset_days {
        Some(days) => {
            let offset = Duration::try_days(days)
                .ok_or_else(|| anyhow::anyhow!("Offset of {days} days is out of range"))?;
            Box::new(SimulatedClock::with_offset(offset)?)
        }
        None => Box::new(SystemClock),
    };
    Ok(source.now())
}

/// Reads and validates an investment file (a JSON array of records).
pub fn load_investments(path: &Path) -> Result<Vec<Investment>> {
    let records: Vec<InvestmentRecord> = read_json(path)?;
    Ok(investments_from_records(records)?)
}

/// Keeps only the investment with `id`, if one was requested.
pub fn select(investments: Vec<Investment>, id: Option<&str>) -> CliResult<Vec<Investment>> {
    let Some(id) = id else {
        return Ok(investments);
    };
    let selected: Vec<Investment> = investments.into_iter().filter(|inv| inv.id == id).collect();
    if selected.is_empty() {
        return Err(CliError::InvestmentNotFound(id.to_string()));
    }
    Ok(selected)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: PathBuf::from(path),
        source,
    })
}
