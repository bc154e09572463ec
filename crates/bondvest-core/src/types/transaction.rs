//! Ledger entries posted by the server against an investment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AsOf;
use crate::error::CoreError;

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Monthly interest paid out in cash.
    Distribution,
    /// Monthly interest credited back into principal.
    Contribution,
}

impl FromStr for TransactionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distribution" => Ok(Self::Distribution),
            "contribution" => Ok(Self::Contribution),
            other => Err(CoreError::configuration("transaction type", other)),
        }
    }
}

/// Settlement state of a ledger entry.
///
/// The ledger's status vocabulary is open-ended. Only `rejected` changes how
/// an entry is counted, so any status outside the known set is kept verbatim
/// as [`TransactionStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    /// Posted, not yet approved.
    Pending,
    /// Approved by an admin.
    Approved,
    /// Funds delivered.
    Received,
    /// Voided; never counts toward earnings.
    Rejected,
    /// Any other ledger status, counted like a settled entry.
    Other(String),
}

impl TransactionStatus {
    /// The status as the ledger spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Received => "received",
            Self::Rejected => "rejected",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the entry was voided.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl From<&str> for TransactionStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "received" => Self::Received,
            "rejected" => Self::Rejected,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single interest event already written to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger identifier.
    pub id: String,
    /// Distribution or contribution.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in currency units.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// When the entry took effect.
    pub date: AsOf,
    /// Settlement state.
    pub status: TransactionStatus,
}

impl Transaction {
    /// Creates a transaction.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        date: AsOf,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            date,
            status,
        }
    }

    /// A distribution that counts toward realized earnings at `as_of`.
    #[must_use]
    pub fn is_realized_distribution(&self, as_of: AsOf) -> bool {
        self.kind == TransactionKind::Distribution
            && !self.status.is_rejected()
            && self.date <= as_of
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_realized_distribution_filter() {
        let date = AsOf::parse("2024-03-01").unwrap();
        let before = AsOf::parse("2024-02-28").unwrap();
        let after = AsOf::parse("2024-03-02").unwrap();

        let tx = Transaction::new(
            "TX-1",
            TransactionKind::Distribution,
            dec!(66.67),
            date,
            TransactionStatus::Approved,
        );
        assert!(tx.is_realized_distribution(date));
        assert!(tx.is_realized_distribution(after));
        assert!(!tx.is_realized_distribution(before));

        let rejected = Transaction {
            status: TransactionStatus::Rejected,
            ..tx.clone()
        };
        assert!(!rejected.is_realized_distribution(after));

        let contribution = Transaction {
            kind: TransactionKind::Contribution,
            ..tx
        };
        assert!(!contribution.is_realized_distribution(after));
    }

    #[test]
    fn test_unknown_kind() {
        assert!("refund".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status = TransactionStatus::from("completed");
        assert_eq!(status, TransactionStatus::Other("completed".into()));
        assert_eq!(status.to_string(), "completed");
        assert!(!status.is_rejected());
        assert_eq!(TransactionStatus::from("rejected"), TransactionStatus::Rejected);
    }

    #[test]
    fn test_unknown_status_counts_as_realized() {
        let date = AsOf::parse("2024-03-01").unwrap();
        let tx = Transaction::new(
            "TX-2",
            TransactionKind::Distribution,
            dec!(80),
            date,
            TransactionStatus::from("completed"),
        );
        assert!(tx.is_realized_distribution(date));
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&TransactionStatus::Received).unwrap();
        assert_eq!(json, "\"received\"");
        let other: TransactionStatus = serde_json::from_str("\"settled\"").unwrap();
        assert_eq!(other, TransactionStatus::Other("settled".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"settled\"");
    }
}
