//! Error types for the Bondvest core crate.
//!
//! Errors here describe bad inputs handed to the engine: an as-of time that
//! cannot be parsed, or an investment record that violates the data contract.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An as-of time or record timestamp could not be parsed.
    #[error("Invalid timestamp: '{value}'")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
    },

    /// An enumerated field carried a value outside the known set.
    #[error("Configuration error: unknown {field} '{value}'")]
    ConfigurationError {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An investment record is structurally unusable.
    #[error("Invalid investment '{id}': {reason}")]
    InvalidInvestment {
        /// The investment identifier.
        id: String,
        /// Why the record was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid timestamp error.
    #[must_use]
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Creates a configuration error for an unknown enumerated value.
    #[must_use]
    pub fn configuration(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid investment error.
    #[must_use]
    pub fn invalid_investment(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInvestment {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
