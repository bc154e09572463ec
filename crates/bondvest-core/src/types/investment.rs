//! The investment entity.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{AsOf, InvestmentStatus, LockupPeriod, PaymentFrequency, Transaction};
use crate::error::CoreResult;

/// Face value of one bond in currency units.
pub const BOND_DENOMINATION: Decimal = dec!(10);

/// Smallest principal accepted at creation (enforced upstream).
pub const MINIMUM_INVESTMENT: Decimal = dec!(1000);

/// Days between a withdrawal request and the payout deadline.
pub const WITHDRAWAL_NOTICE_DAYS: i64 = 90;

/// An investment as handed to the engine by the API layer.
///
/// Terms are immutable once confirmed; only the status and lifecycle
/// timestamps move afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Opaque identifier.
    pub id: String,
    /// Principal in whole currency units.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Lockup term.
    pub lockup_period: LockupPeriod,
    /// Payout or compounding.
    pub payment_frequency: PaymentFrequency,
    /// Lifecycle status.
    pub status: InvestmentStatus,
    /// When the investment was created.
    pub created_at: AsOf,
    /// When an admin approved it.
    #[serde(default)]
    pub confirmed_at: Option<AsOf>,
    /// When the investor requested withdrawal.
    #[serde(default)]
    pub withdrawal_notice_start_at: Option<AsOf>,
    /// Persisted payout deadline.
    #[serde(default)]
    pub payout_due_by: Option<AsOf>,
    /// When the payout was processed.
    #[serde(default)]
    pub withdrawn_at: Option<AsOf>,
    /// Interest events posted by the server.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Lifetime earnings, frozen at withdrawal.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total_earnings: Option<Decimal>,
}

impl Investment {
    /// Creates a draft investment.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        lockup_period: LockupPeriod,
        payment_frequency: PaymentFrequency,
        created_at: AsOf,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            lockup_period,
            payment_frequency,
            status: InvestmentStatus::Draft,
            created_at,
            confirmed_at: None,
            withdrawal_notice_start_at: None,
            payout_due_by: None,
            withdrawn_at: None,
            transactions: Vec::new(),
            total_earnings: None,
        }
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: InvestmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the investment active, confirmed at `at`.
    #[must_use]
    pub fn confirmed(mut self, at: AsOf) -> Self {
        self.status = InvestmentStatus::Active;
        self.confirmed_at = Some(at);
        self
    }

    /// Moves the investment into its withdrawal notice window starting at `at`.
    ///
    /// The payout deadline is left unset if it falls outside the calendar.
    #[must_use]
    pub fn with_withdrawal_notice(mut self, at: AsOf) -> Self {
        self.status = InvestmentStatus::WithdrawalNotice;
        self.withdrawal_notice_start_at = Some(at);
        self.payout_due_by = at.add_days(WITHDRAWAL_NOTICE_DAYS).ok();
        self
    }

    /// Marks the investment withdrawn at `at` with frozen lifetime earnings.
    #[must_use]
    pub fn withdrawn(mut self, at: AsOf, total_earnings: Decimal) -> Self {
        self.status = InvestmentStatus::Withdrawn;
        self.withdrawn_at = Some(at);
        self.total_earnings = Some(total_earnings);
        self
    }

    /// Appends a ledger entry.
    #[must_use]
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Number of $10 bonds the principal buys.
    #[must_use]
    pub fn bonds(&self) -> u64 {
        (self.amount / BOND_DENOMINATION)
            .floor()
            .to_u64()
            .unwrap_or(0)
    }

    /// Payout deadline: the persisted value, else notice start plus `notice_days`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the derived deadline is out of range.
    pub fn payout_due(&self, notice_days: i64) -> CoreResult<Option<AsOf>> {
        if self.payout_due_by.is_some() {
            return Ok(self.payout_due_by);
        }
        self.withdrawal_notice_start_at
            .map(|start| start.add_days(notice_days))
            .transpose()
    }

    /// The instant accrual stopped for a withdrawn investment.
    ///
    /// Notice start when known, else the withdrawal time.
    #[must_use]
    pub fn accrual_cutoff(&self) -> Option<AsOf> {
        self.withdrawal_notice_start_at.or(self.withdrawn_at)
    }

    /// Whether the principal satisfies the creation rules (multiple of $10, at least $1,000).
    #[must_use]
    pub fn meets_minimums(&self) -> bool {
        self.amount >= MINIMUM_INVESTMENT && (self.amount % BOND_DENOMINATION).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> AsOf {
        AsOf::parse(s).unwrap()
    }

    fn sample() -> Investment {
        Investment::new(
            "INV-1",
            dec!(10_000),
            LockupPeriod::OneYear,
            PaymentFrequency::Monthly,
            at("2024-01-01"),
        )
    }

    #[test]
    fn test_new_is_draft() {
        let inv = sample();
        assert_eq!(inv.status, InvestmentStatus::Draft);
        assert!(inv.confirmed_at.is_none());
        assert!(inv.transactions.is_empty());
    }

    #[test]
    fn test_bonds() {
        assert_eq!(sample().bonds(), 1000);
        let odd = Investment {
            amount: dec!(1005),
            ..sample()
        };
        assert_eq!(odd.bonds(), 100);
        assert!(!odd.meets_minimums());
        assert!(sample().meets_minimums());
    }

    #[test]
    fn test_payout_due_defaults_to_notice_window() {
        let mut inv = sample()
            .confirmed(at("2024-01-02"))
            .with_withdrawal_notice(at("2025-02-01"));
        assert_eq!(inv.payout_due(WITHDRAWAL_NOTICE_DAYS).unwrap(), Some(at("2025-05-02")));

        inv.payout_due_by = None;
        assert_eq!(inv.payout_due(30).unwrap(), Some(at("2025-03-03")));
    }

    #[test]
    fn test_payout_due_out_of_range() {
        let mut inv = sample()
            .confirmed(at("2024-01-02"))
            .with_withdrawal_notice(at("2025-02-01"));
        inv.payout_due_by = None;
        assert!(matches!(
            inv.payout_due(100_000_000),
            Err(crate::error::CoreError::InvalidDate { .. })
        ));
        assert_eq!(sample().payout_due(100_000_000).unwrap(), None);
    }

    #[test]
    fn test_accrual_cutoff_prefers_notice_start() {
        let inv = sample()
            .confirmed(at("2024-01-02"))
            .with_withdrawal_notice(at("2025-02-01"))
            .withdrawn(at("2025-05-01"), dec!(800));
        assert_eq!(inv.accrual_cutoff(), Some(at("2025-02-01")));

        let no_notice = Investment {
            withdrawal_notice_start_at: None,
            ..inv
        };
        assert_eq!(no_notice.accrual_cutoff(), Some(at("2025-05-01")));
    }

    #[test]
    fn test_serde_camel_case() {
        let inv = sample().confirmed(at("2024-01-02"));
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["lockupPeriod"], "1-year");
        assert_eq!(json["paymentFrequency"], "monthly");
        assert_eq!(json["status"], "active");
        assert_eq!(json["amount"], "10000");
        assert!(json.get("confirmedAt").is_some());

        let back: Investment = serde_json::from_value(json).unwrap();
        assert_eq!(back, inv);
    }
}
