//! Error types for accrual and status calculations.

use bondvest_core::CoreError;
use thiserror::Error;

/// Result type for accrual operations.
pub type AccrualResult<T> = Result<T, AccrualError>;

/// Errors that can occur while computing an investment's value or status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrualError {
    /// Invalid input (timestamp, enumerated value, record).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Calendar arithmetic left the representable date range.
    #[error("Date overflow for investment '{investment_id}' adding {months} months")]
    DateOverflow {
        /// The investment identifier.
        investment_id: String,
        /// Months that were being added.
        months: u32,
    },

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow for investment '{investment_id}': {operation}")]
    Overflow {
        /// The investment identifier.
        investment_id: String,
        /// The operation that overflowed.
        operation: String,
    },
}

impl AccrualError {
    /// Create a date overflow error.
    #[must_use]
    pub fn date_overflow(investment_id: impl Into<String>, months: u32) -> Self {
        Self::DateOverflow {
            investment_id: investment_id.into(),
            months,
        }
    }

    /// Create an arithmetic overflow error.
    #[must_use]
    pub fn overflow(investment_id: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::Overflow {
            investment_id: investment_id.into(),
            operation: operation.into(),
        }
    }
}
