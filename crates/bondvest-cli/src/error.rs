//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// The file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An input file is not valid JSON of the expected shape.
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        /// The file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// No investment with the requested id.
    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
