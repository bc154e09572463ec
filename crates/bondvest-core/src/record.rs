//! Wire-format investment records and their validation.
//!
//! The API layer hands investments over as loosely typed JSON: enums and
//! timestamps arrive as strings. [`InvestmentRecord`] mirrors that shape and
//! `Investment::try_from` is the single place where the data contract is
//! checked. An unknown lifecycle status, lockup or frequency is a
//! configuration error. Ledger rows are read leniently: an unknown settlement
//! status is kept and counted, and a row of unknown type is logged and
//! skipped. A malformed optional timestamp is logged and treated as absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::{
    AsOf, Investment, InvestmentStatus, Transaction, TransactionKind, TransactionStatus,
};

/// An investment exactly as received from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    /// Investment identifier.
    pub id: String,
    /// Principal in currency units.
    pub amount: Decimal,
    /// Lockup term, `1-year` or `3-year`.
    pub lockup_period: String,
    /// Payment frequency, `monthly` or `compounding`.
    pub payment_frequency: String,
    /// Lifecycle status in snake_case.
    pub status: String,
    /// Creation time, ISO-8601.
    pub created_at: String,
    /// Admin confirmation time; ignored while draft or pending.
    #[serde(default)]
    pub confirmed_at: Option<String>,
    /// When the withdrawal request was made.
    #[serde(default)]
    pub withdrawal_notice_start_at: Option<String>,
    /// Persisted payout deadline.
    #[serde(default)]
    pub payout_due_by: Option<String>,
    /// When the principal was paid out.
    #[serde(default)]
    pub withdrawn_at: Option<String>,
    /// Ledger entries posted against the investment.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    /// Lifetime earnings frozen at withdrawal.
    #[serde(default)]
    pub total_earnings: Option<Decimal>,
}

/// A ledger entry exactly as received from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Ledger identifier.
    pub id: String,
    /// Entry type, `distribution` or `contribution`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in currency units.
    pub amount: Decimal,
    /// When the entry took effect, ISO-8601.
    pub date: String,
    /// Settlement status; any value other than `rejected` counts.
    pub status: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = CoreError;

    fn try_from(record: TransactionRecord) -> CoreResult<Self> {
        Ok(Transaction {
            kind: record.kind.parse()?,
            status: TransactionStatus::from(record.status),
            date: AsOf::parse(&record.date)?,
            amount: record.amount,
            id: record.id,
        })
    }
}

impl TryFrom<InvestmentRecord> for Investment {
    type Error = CoreError;

    fn try_from(record: InvestmentRecord) -> CoreResult<Self> {
        let status: InvestmentStatus = record.status.parse()?;
        let lockup_period = record.lockup_period.parse()?;
        let payment_frequency = record.payment_frequency.parse()?;

        if record.amount <= Decimal::ZERO {
            return Err(CoreError::invalid_investment(
                record.id,
                format!("amount must be positive, got {}", record.amount),
            ));
        }

        let created_at = AsOf::parse(&record.created_at)?;

        // Drafts and pending investments carry no meaningful confirmation.
        let confirmed_at = if status.is_uncommitted() {
            None
        } else {
            lenient_timestamp(&record.id, "confirmedAt", record.confirmed_at.as_deref())
        };

        let transactions = record
            .transactions
            .into_iter()
            .filter_map(|tx| ledger_entry(&record.id, tx))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Investment {
            withdrawal_notice_start_at: lenient_timestamp(
                &record.id,
                "withdrawalNoticeStartAt",
                record.withdrawal_notice_start_at.as_deref(),
            ),
            payout_due_by: lenient_timestamp(
                &record.id,
                "payoutDueBy",
                record.payout_due_by.as_deref(),
            ),
            withdrawn_at: lenient_timestamp(&record.id, "withdrawnAt", record.withdrawn_at.as_deref()),
            id: record.id,
            amount: record.amount,
            lockup_period,
            payment_frequency,
            status,
            created_at,
            confirmed_at,
            transactions,
            total_earnings: record.total_earnings,
        })
    }
}

/// Converts one ledger row, skipping entry types the engine has no rule for.
fn ledger_entry(
    investment_id: &str,
    record: TransactionRecord,
) -> Option<CoreResult<Transaction>> {
    if let Err(err) = record.kind.parse::<TransactionKind>() {
        warn!(
            investment_id,
            transaction_id = %record.id,
            error = %err,
            "Skipping ledger entry of unknown type"
        );
        return None;
    }
    Some(Transaction::try_from(record))
}

fn lenient_timestamp(id: &str, field: &str, value: Option<&str>) -> Option<AsOf> {
    let raw = value?;
    if raw.trim().is_empty() {
        return None;
    }
    match AsOf::parse(raw) {
        Ok(at) => Some(at),
        Err(err) => {
            warn!(investment_id = id, field, error = %err, "Ignoring malformed timestamp");
            None
        }
    }
}

/// Validates a batch of records, failing on the first contract violation.
pub fn investments_from_records(records: Vec<InvestmentRecord>) -> CoreResult<Vec<Investment>> {
    records.into_iter().map(Investment::try_from).collect()
}
