//! Accrual engine: current value and earnings of a single investment.
//!
//! All arithmetic is carried in unrounded `Decimal` and rounded to cents only
//! when a [`ValueResult`] is assembled, so monthly compounding never picks up
//! rounding drift.

use bondvest_core::types::{AsOf, Date, Investment, InvestmentStatus, PaymentFrequency};
use bondvest_core::TimeSource;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{AccrualConfig, NoticeAccrual};
use crate::error::{AccrualError, AccrualResult};
use crate::lockup::{self, round_currency};

/// Value and earnings of one investment at one as-of time.
///
/// `realized_earnings` and `projected_earnings` are reported separately:
/// for `monthly` investments the first is what the ledger says was paid and
/// the second is what elapsed months imply. `total_earnings` is the display
/// figure and always equals `realized_earnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueResult {
    /// The investment identifier.
    pub investment_id: String,
    /// The time the figures are valid for.
    pub as_of: AsOf,
    /// Principal plus any compounded or frozen earnings.
    #[serde(with = "rust_decimal::serde::str")]
    pub current_value: Decimal,
    /// Lifetime earnings for display.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_earnings: Decimal,
    /// Earnings backed by the ledger (monthly) or the analytic value (compounding).
    #[serde(with = "rust_decimal::serde::str")]
    pub realized_earnings: Decimal,
    /// Earnings implied by elapsed months.
    #[serde(with = "rust_decimal::serde::str")]
    pub projected_earnings: Decimal,
    /// Fixed monthly payout, or next month's compounded credit.
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_interest_amount: Decimal,
    /// Whole calendar months accrued.
    pub months_elapsed: u32,
    /// Active and past the lockup.
    pub is_withdrawable: bool,
    /// Confirmation plus the lockup term; `None` until confirmed.
    pub lockup_end_date: Option<Date>,
    /// Annual percentage yield for the lockup term.
    #[serde(with = "rust_decimal::serde::str")]
    pub apy: Decimal,
    /// Number of $10 bonds held.
    pub bonds: u64,
}

/// A future monthly accrual event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayment {
    /// 1-based month number since confirmation.
    pub period: u32,
    /// Date the month completes.
    pub date: Date,
    /// Interest paid out or credited for the month.
    #[serde(with = "rust_decimal::serde::str")]
    pub interest: Decimal,
    /// Principal plus compounded interest after the month.
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

/// What a withdrawal is expected to pay out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutEstimate {
    /// The investment identifier.
    pub investment_id: String,
    /// When the payout is due.
    pub payout_due: AsOf,
    /// Principal returned.
    #[serde(with = "rust_decimal::serde::str")]
    pub principal: Decimal,
    /// Earnings paid with the principal.
    #[serde(with = "rust_decimal::serde::str")]
    pub earnings: Decimal,
    /// `principal + earnings`.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Computes investment value and earnings against an explicit as-of time.
///
/// The engine holds configuration only; it never reads a clock on its own.
///
/// # Example
///
/// ```rust
/// use bondvest_accrual::AccrualEngine;
/// use bondvest_core::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let investment = Investment::new(
///     "INV-1",
///     dec!(10_000),
///     LockupPeriod::ThreeYear,
///     PaymentFrequency::Compounding,
///     AsOf::parse("2024-01-01").unwrap(),
/// )
/// .confirmed(AsOf::parse("2024-01-01").unwrap());
///
/// let engine = AccrualEngine::default();
/// let value = engine.compute(&investment, AsOf::parse("2025-01-01").unwrap()).unwrap();
/// assert_eq!(value.months_elapsed, 12);
/// assert_eq!(value.current_value, dec!(11047.13));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    config: AccrualConfig,
}

impl AccrualEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: AccrualConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// Computes value and earnings at `as_of`.
    ///
    /// Withdrawn investments report their frozen lifetime earnings; everything
    /// else is recomputed from terms and ledger.
    pub fn compute(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<ValueResult> {
        if investment.status == InvestmentStatus::Withdrawn {
            return self.frozen(investment, as_of);
        }
        self.accrue(investment, self.effective_as_of(investment, as_of), as_of)
    }

    /// Computes value and earnings at the time reported by `clock`.
    pub fn compute_now(
        &self,
        investment: &Investment,
        clock: &dyn TimeSource,
    ) -> AccrualResult<ValueResult> {
        self.compute(investment, clock.now())
    }

    /// Recomputes accrual at `as_of` as if the investment were still held.
    ///
    /// Unlike [`AccrualEngine::compute`] this ignores the withdrawn freeze, so
    /// a historical chart can show what a since-withdrawn investment had earned
    /// before its notice started.
    pub fn live_accrual(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<ValueResult> {
        self.accrue(investment, as_of, as_of)
    }

    /// Estimates what a withdrawal pays out.
    ///
    /// Uses the investment's payout deadline when it has one, else a request
    /// made at `as_of`. Withdrawn investments report their frozen value.
    pub fn projected_payout(
        &self,
        investment: &Investment,
        as_of: AsOf,
    ) -> AccrualResult<PayoutEstimate> {
        let notice_days = self.config.withdrawal_notice_days;
        let payout_due = match investment.payout_due(notice_days)? {
            Some(due) => due,
            None => as_of.add_days(notice_days)?,
        };

        let value = if investment.status == InvestmentStatus::Withdrawn {
            self.frozen(investment, as_of)?
        } else {
            let evaluated_at = payout_due.max(as_of);
            let effective = match (self.config.notice_accrual, investment.status) {
                // Requesting now freezes at now.
                (NoticeAccrual::FreezeAtRequest, InvestmentStatus::Active) => as_of,
                _ => self.effective_as_of(investment, evaluated_at),
            };
            self.accrue(investment, effective, evaluated_at)?
        };

        // Monthly interest has already been distributed; only principal remains.
        let earnings = match investment.payment_frequency {
            PaymentFrequency::Compounding => value.current_value - investment.amount,
            PaymentFrequency::Monthly => Decimal::ZERO,
        };

        Ok(PayoutEstimate {
            investment_id: investment.id.clone(),
            payout_due,
            principal: investment.amount,
            earnings,
            amount: investment.amount + earnings,
        })
    }

    /// Lists the first `periods` monthly accrual events after confirmation.
    ///
    /// Empty for an unconfirmed investment.
    pub fn payment_schedule(
        &self,
        investment: &Investment,
        periods: u32,
    ) -> AccrualResult<Vec<ScheduledPayment>> {
        let Some(confirmed) = investment.confirmed_at else {
            return Ok(Vec::new());
        };
        let rate = investment.lockup_period.monthly_rate();
        let growth = Decimal::ONE + rate;

        let mut schedule = Vec::with_capacity(periods as usize);
        let mut balance = investment.amount;
        for period in 1..=periods {
            let date = confirmed
                .add_months(period)
                .ok_or_else(|| AccrualError::date_overflow(&investment.id, period))?
                .date();

            let (interest, next_balance) = match investment.payment_frequency {
                PaymentFrequency::Monthly => (investment.amount * rate, balance),
                PaymentFrequency::Compounding => {
                    let next = balance
                        .checked_mul(growth)
                        .ok_or_else(|| AccrualError::overflow(&investment.id, "schedule"))?;
                    (next - balance, next)
                }
            };
            balance = next_balance;

            schedule.push(ScheduledPayment {
                period,
                date,
                interest: round_currency(interest),
                balance: round_currency(balance),
            });
        }
        Ok(schedule)
    }

    /// Schedule covering the whole lockup term.
    pub fn lockup_schedule(&self, investment: &Investment) -> AccrualResult<Vec<ScheduledPayment>> {
        self.payment_schedule(investment, investment.lockup_period.term_months())
    }

    /// The instant accrual is evaluated at, honouring the notice-window mode.
    fn effective_as_of(&self, investment: &Investment, as_of: AsOf) -> AsOf {
        match (self.config.notice_accrual, investment.status) {
            (NoticeAccrual::FreezeAtRequest, InvestmentStatus::WithdrawalNotice) => investment
                .withdrawal_notice_start_at
                .map_or(as_of, |start| start.min(as_of)),
            _ => as_of,
        }
    }

    fn accrue(
        &self,
        investment: &Investment,
        effective: AsOf,
        reported: AsOf,
    ) -> AccrualResult<ValueResult> {
        let accruing = matches!(
            investment.status,
            InvestmentStatus::Active | InvestmentStatus::WithdrawalNotice | InvestmentStatus::Withdrawn
        );
        if accruing && investment.confirmed_at.is_none() {
            warn!(
                investment_id = %investment.id,
                status = %investment.status,
                "Investment has no confirmation time; reporting zero accrual"
            );
        }

        let months = if accruing {
            lockup::months_elapsed(investment, effective)
        } else {
            0
        };
        let rate = investment.lockup_period.monthly_rate();

        let (current_value, realized, projected, monthly_interest) =
            match investment.payment_frequency {
                PaymentFrequency::Compounding => {
                    let growth = (Decimal::ONE + rate).checked_powu(u64::from(months)).ok_or_else(
                        || AccrualError::overflow(&investment.id, "compound growth"),
                    )?;
                    let value = investment
                        .amount
                        .checked_mul(growth)
                        .ok_or_else(|| AccrualError::overflow(&investment.id, "compound value"))?;
                    let earnings = value - investment.amount;
                    (value, earnings, earnings, value * rate)
                }
                PaymentFrequency::Monthly => {
                    let payout = round_currency(investment.amount * rate);
                    let realized = investment
                        .transactions
                        .iter()
                        .filter(|tx| accruing && tx.is_realized_distribution(reported))
                        .try_fold(Decimal::ZERO, |sum, tx| sum.checked_add(tx.amount))
                        .ok_or_else(|| AccrualError::overflow(&investment.id, "ledger sum"))?;
                    let projected = payout
                        .checked_mul(Decimal::from(months))
                        .ok_or_else(|| AccrualError::overflow(&investment.id, "monthly payouts"))?;
                    (investment.amount, realized, projected, payout)
                }
            };

        let realized = round_currency(realized);
        debug!(
            investment_id = %investment.id,
            months,
            earnings = %realized,
            "Computed accrual"
        );

        Ok(ValueResult {
            investment_id: investment.id.clone(),
            as_of: reported,
            current_value: round_currency(current_value),
            total_earnings: realized,
            realized_earnings: realized,
            projected_earnings: round_currency(projected),
            monthly_interest_amount: round_currency(monthly_interest),
            months_elapsed: months,
            is_withdrawable: lockup::is_withdrawable(investment, effective),
            lockup_end_date: lockup::lockup_end(investment)?.map(|end| end.date()),
            apy: investment.lockup_period.apy(),
            bonds: investment.bonds(),
        })
    }

    fn frozen(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<ValueResult> {
        let earnings = investment.total_earnings.unwrap_or_else(|| {
            warn!(
                investment_id = %investment.id,
                "Withdrawn investment has no frozen earnings; reporting zero"
            );
            Decimal::ZERO
        });
        let earnings = round_currency(earnings);
        let value = investment
            .amount
            .checked_add(earnings)
            .ok_or_else(|| AccrualError::overflow(&investment.id, "frozen value"))?;
        let cutoff = investment.accrual_cutoff().map_or(as_of, |at| at.min(as_of));

        Ok(ValueResult {
            investment_id: investment.id.clone(),
            as_of,
            current_value: round_currency(value),
            total_earnings: earnings,
            realized_earnings: earnings,
            projected_earnings: earnings,
            monthly_interest_amount: Decimal::ZERO,
            months_elapsed: lockup::months_elapsed(investment, cutoff),
            is_withdrawable: false,
            lockup_end_date: lockup::lockup_end(investment)?.map(|end| end.date()),
            apy: investment.lockup_period.apy(),
            bonds: investment.bonds(),
        })
    }
}

/// Computes value and earnings at an ISO-8601 as-of time with default configuration.
///
/// # Errors
///
/// `InvalidTimestamp` if `as_of_iso` cannot be parsed.
pub fn compute_value(investment: &Investment, as_of_iso: &str) -> AccrualResult<ValueResult> {
    let as_of = AsOf::parse(as_of_iso)?;
    AccrualEngine::default().compute(investment, as_of)
}
