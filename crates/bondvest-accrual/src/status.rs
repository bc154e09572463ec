//! Status resolver: lifecycle label, flags and key dates.
//!
//! The resolver reads state; it never causes a transition. Transitions are
//! driven by admin approval, withdrawal requests and payout processing on the
//! server.

use bondvest_core::types::{AsOf, Date, Investment, InvestmentStatus};
use bondvest_core::TimeSource;
use serde::{Deserialize, Serialize};

use crate::config::AccrualConfig;
use crate::error::AccrualResult;
use crate::lockup;

/// Key dates in an investment's life, as calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleDates {
    /// Creation date.
    pub created_on: Date,
    /// Admin approval date.
    pub confirmed_on: Option<Date>,
    /// End of the lockup term.
    pub lockup_ends_on: Option<Date>,
    /// Withdrawal request date.
    pub withdrawal_notice_started_on: Option<Date>,
    /// Payout deadline.
    pub payout_due_on: Option<Date>,
    /// Payout date.
    pub withdrawn_on: Option<Date>,
    /// Days left until the payout deadline while in the notice window.
    pub notice_days_remaining: Option<i64>,
}

/// Derived status of one investment at one as-of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    /// The investment identifier.
    pub investment_id: String,
    /// Stored lifecycle status.
    pub status: InvestmentStatus,
    /// Human-readable label.
    pub label: String,
    /// No edits, deletion or withdrawal request allowed.
    pub is_locked: bool,
    /// Status is `active`.
    pub is_active: bool,
    /// Active and past the lockup.
    pub is_withdrawable: bool,
    /// Key dates.
    pub lifecycle: LifecycleDates,
}

/// Human-readable label for a status.
///
/// Active investments read differently once the lockup has been served.
#[must_use]
pub fn status_label(status: InvestmentStatus, is_withdrawable: bool) -> &'static str {
    match status {
        InvestmentStatus::Draft => "Draft",
        InvestmentStatus::Pending => "Pending Approval",
        InvestmentStatus::Active if is_withdrawable => "Available for Withdrawal",
        InvestmentStatus::Active => "Active",
        InvestmentStatus::WithdrawalNotice => "Withdrawal Notice",
        InvestmentStatus::Withdrawn => "Withdrawn",
        InvestmentStatus::Rejected => "Rejected",
    }
}

/// Derives status flags and lifecycle dates.
#[derive(Debug, Clone, Default)]
pub struct StatusResolver {
    config: AccrualConfig,
}

impl StatusResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn new(config: AccrualConfig) -> Self {
        Self { config }
    }

    /// Resolves status at `as_of`.
    pub fn resolve(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<StatusResult> {
        let status = investment.status;
        let is_withdrawable = lockup::is_withdrawable(investment, as_of);

        let is_locked = match status {
            InvestmentStatus::Draft => false,
            InvestmentStatus::Active => !is_withdrawable,
            InvestmentStatus::Pending
            | InvestmentStatus::WithdrawalNotice
            | InvestmentStatus::Withdrawn
            | InvestmentStatus::Rejected => true,
        };

        Ok(StatusResult {
            investment_id: investment.id.clone(),
            status,
            label: status_label(status, is_withdrawable).to_string(),
            is_locked,
            is_active: status == InvestmentStatus::Active,
            is_withdrawable,
            lifecycle: self.lifecycle(investment, as_of)?,
        })
    }

    /// Resolves status at the time reported by `clock`.
    pub fn resolve_now(
        &self,
        investment: &Investment,
        clock: &dyn TimeSource,
    ) -> AccrualResult<StatusResult> {
        self.resolve(investment, clock.now())
    }

    /// Whether the lifecycle permits a reported status change.
    #[must_use]
    pub fn can_transition(&self, from: InvestmentStatus, to: InvestmentStatus) -> bool {
        from.can_transition_to(to)
    }

    /// Computes the key lifecycle dates.
    pub fn lifecycle(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<LifecycleDates> {
        let payout_due = match investment.withdrawal_notice_start_at {
            Some(_) => investment.payout_due(self.config.withdrawal_notice_days)?,
            None => None,
        };

        let notice_days_remaining = match (investment.status, payout_due) {
            (InvestmentStatus::WithdrawalNotice, Some(due)) => {
                Some(as_of.date().days_between(&due.date()).max(0))
            }
            _ => None,
        };

        Ok(LifecycleDates {
            created_on: investment.created_at.date(),
            confirmed_on: investment.confirmed_at.map(|at| at.date()),
            lockup_ends_on: lockup::lockup_end(investment)?.map(|end| end.date()),
            withdrawal_notice_started_on: investment.withdrawal_notice_start_at.map(|at| at.date()),
            payout_due_on: payout_due.map(|at| at.date()),
            withdrawn_on: investment.withdrawn_at.map(|at| at.date()),
            notice_days_remaining,
        })
    }
}

/// Resolves status at an ISO-8601 as-of time with default configuration.
///
/// # Errors
///
/// `InvalidTimestamp` if `as_of_iso` cannot be parsed.
pub fn resolve_status(investment: &Investment, as_of_iso: &str) -> AccrualResult<StatusResult> {
    let as_of = AsOf::parse(as_of_iso)?;
    StatusResolver::default().resolve(investment, as_of)
}
