//! Error types for portfolio aggregation.

use bondvest_accrual::AccrualError;
use bondvest_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio aggregation.
///
/// Aggregating an empty portfolio is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Invalid input (timestamp, enumerated value, record).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A per-investment calculation failed.
    #[error(transparent)]
    Accrual(#[from] AccrualError),

    /// A portfolio total left the representable decimal range.
    #[error("Arithmetic overflow summing {total}")]
    Overflow {
        /// The total being summed.
        total: String,
    },
}

impl PortfolioError {
    /// Create an overflow error for a portfolio total.
    #[must_use]
    pub fn overflow(total: impl Into<String>) -> Self {
        Self::Overflow {
            total: total.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: PortfolioError = CoreError::invalid_timestamp("tomorrow").into();
        assert!(err.to_string().contains("tomorrow"));

        let err: PortfolioError = AccrualError::date_overflow("INV-9", 12).into();
        assert!(err.to_string().contains("INV-9"));

        let err = PortfolioError::overflow("total invested");
        assert_eq!(err.to_string(), "Arithmetic overflow summing total invested");
    }
}
