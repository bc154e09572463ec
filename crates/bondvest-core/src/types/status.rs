//! Investment lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Where an investment sits in its lifecycle.
///
/// ```text
/// draft -> pending -> active -> withdrawal_notice -> withdrawn
///             \-> rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    /// Being edited by the investor; freely deletable.
    Draft,
    /// Submitted and awaiting admin approval.
    Pending,
    /// Approved and accruing.
    Active,
    /// Withdrawal requested; payout due at the end of the notice window.
    WithdrawalNotice,
    /// Paid out. Terminal.
    Withdrawn,
    /// Declined by an admin. Terminal.
    Rejected,
}

impl InvestmentStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [InvestmentStatus; 6] = [
        InvestmentStatus::Draft,
        InvestmentStatus::Pending,
        InvestmentStatus::Active,
        InvestmentStatus::WithdrawalNotice,
        InvestmentStatus::Withdrawn,
        InvestmentStatus::Rejected,
    ];

    /// Capital currently held and earning: `active` or `withdrawal_notice`.
    #[must_use]
    pub fn holds_capital(&self) -> bool {
        matches!(self, Self::Active | Self::WithdrawalNotice)
    }

    /// Capital committed but not yet earning: `draft` or `pending`.
    #[must_use]
    pub fn is_uncommitted(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }

    /// Statuses whose earnings count toward lifetime totals.
    #[must_use]
    pub fn has_earnings(&self) -> bool {
        matches!(self, Self::Active | Self::WithdrawalNotice | Self::Withdrawn)
    }

    /// No further transitions are possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Withdrawn | Self::Rejected)
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(&self, next: InvestmentStatus) -> bool {
        use InvestmentStatus::{Active, Draft, Pending, Rejected, WithdrawalNotice, Withdrawn};
        matches!(
            (self, next),
            (Draft, Pending)
                | (Pending, Active)
                | (Pending, Rejected)
                | (Active, WithdrawalNotice)
                | (WithdrawalNotice, Withdrawn)
        )
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::WithdrawalNotice => "withdrawal_notice",
            Self::Withdrawn => "withdrawn",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::configuration("status", s))
    }
}
