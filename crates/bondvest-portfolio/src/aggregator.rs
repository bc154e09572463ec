//! Portfolio aggregation.
//!
//! Rolls a user's investments into the totals shown on the dashboard. Every
//! per-investment figure comes from the same [`AccrualEngine`] and
//! [`StatusResolver`] used for single-investment views, so totals always
//! agree with the rows they summarise.

use bondvest_accrual::{AccrualEngine, AccrualResult, StatusResolver, StatusResult, ValueResult};
use bondvest_core::types::{AsOf, Investment, InvestmentStatus, PaymentFrequency};
use bondvest_core::TimeSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AggregationConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::ordering::display_order;
use crate::parallel::maybe_parallel_map;
use crate::series::{earnings_series, SeriesPoint};

/// One investment with its computed value and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    /// The investment as stored.
    pub investment: Investment,
    /// Value and earnings at the snapshot time.
    pub value: ValueResult,
    /// Status at the snapshot time.
    pub status: StatusResult,
}

/// Portfolio totals at one as-of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// The time the figures are valid for.
    pub as_of: AsOf,

    /// Number of investments, in any status.
    pub investment_count: usize,

    /// Principal of active and withdrawal-notice investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_invested: Decimal,

    /// Principal of draft and pending investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_pending: Decimal,

    /// Lifetime earnings of active, withdrawal-notice and withdrawn investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_earnings: Decimal,

    /// Part of `total_earnings` from compounding investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub compounding_earnings: Decimal,

    /// Part of `total_earnings` from monthly-payout investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_earnings: Decimal,

    /// Current value of active and withdrawal-notice investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_current_value: Decimal,

    /// Monthly payouts from active monthly-payout investments.
    #[serde(with = "rust_decimal::serde::str")]
    pub expected_monthly_income: Decimal,

    /// Cumulative earnings over time, oldest first.
    pub series: Vec<SeriesPoint>,

    /// Investments in display order.
    pub investments: Vec<InvestmentView>,
}

impl PortfolioSnapshot {
    /// Returns true if the portfolio holds no investments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.investment_count == 0
    }
}

#[derive(Debug, Default)]
struct Totals {
    invested: Decimal,
    pending: Decimal,
    earnings: Decimal,
    compounding: Decimal,
    monthly: Decimal,
    current_value: Decimal,
    monthly_income: Decimal,
}

impl Totals {
    fn add(&mut self, view: &InvestmentView) -> PortfolioResult<()> {
        let investment = &view.investment;
        let status = investment.status;

        if status.holds_capital() {
            accumulate(&mut self.invested, investment.amount, "total invested")?;
            accumulate(&mut self.current_value, view.value.current_value, "total current value")?;
        }
        if status.is_uncommitted() {
            accumulate(&mut self.pending, investment.amount, "total pending")?;
        }
        if status.has_earnings() {
            let earnings = view.value.total_earnings;
            accumulate(&mut self.earnings, earnings, "total earnings")?;
            match investment.payment_frequency {
                PaymentFrequency::Compounding => {
                    accumulate(&mut self.compounding, earnings, "compounding earnings")?;
                }
                PaymentFrequency::Monthly => {
                    accumulate(&mut self.monthly, earnings, "monthly earnings")?;
                }
            }
        }
        if status == InvestmentStatus::Active
            && investment.payment_frequency == PaymentFrequency::Monthly
        {
            accumulate(
                &mut self.monthly_income,
                view.value.monthly_interest_amount,
                "expected monthly income",
            )?;
        }
        Ok(())
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal, name: &str) -> PortfolioResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| PortfolioError::overflow(name))?;
    Ok(())
}

/// Aggregates investments into a [`PortfolioSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct PortfolioAggregator {
    config: AggregationConfig,
    engine: AccrualEngine,
    resolver: StatusResolver,
}

impl PortfolioAggregator {
    /// Creates an aggregator with the given configuration.
    #[must_use]
    pub fn new(config: AggregationConfig) -> Self {
        Self {
            engine: AccrualEngine::new(config.accrual.clone()),
            resolver: StatusResolver::new(config.accrual.clone()),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Returns the engine used for per-investment values.
    #[must_use]
    pub fn engine(&self) -> &AccrualEngine {
        &self.engine
    }

    /// Aggregates `investments` at `as_of`.
    pub fn aggregate(
        &self,
        investments: &[Investment],
        as_of: AsOf,
    ) -> PortfolioResult<PortfolioSnapshot> {
        let mut views = maybe_parallel_map(investments, &self.config, |investment| {
            self.view(investment, as_of)
        })
        .into_iter()
        .collect::<AccrualResult<Vec<_>>>()?;

        let mut totals = Totals::default();
        for view in &views {
            totals.add(view)?;
        }

        let series = earnings_series(investments, as_of, &self.engine, &self.config)?;
        views.sort_by(|a, b| display_order(&a.investment, &b.investment));

        debug!(
            investments = views.len(),
            total_invested = %totals.invested,
            total_earnings = %totals.earnings,
            "Aggregated portfolio"
        );

        Ok(PortfolioSnapshot {
            as_of,
            investment_count: views.len(),
            total_invested: totals.invested,
            total_pending: totals.pending,
            total_earnings: totals.earnings,
            compounding_earnings: totals.compounding,
            monthly_earnings: totals.monthly,
            total_current_value: totals.current_value,
            expected_monthly_income: totals.monthly_income,
            series,
            investments: views,
        })
    }

    /// Aggregates at the time reported by `clock`.
    pub fn aggregate_now(
        &self,
        investments: &[Investment],
        clock: &dyn TimeSource,
    ) -> PortfolioResult<PortfolioSnapshot> {
        self.aggregate(investments, clock.now())
    }

    fn view(&self, investment: &Investment, as_of: AsOf) -> AccrualResult<InvestmentView> {
        Ok(InvestmentView {
            investment: investment.clone(),
            value: self.engine.compute(investment, as_of)?,
            status: self.resolver.resolve(investment, as_of)?,
        })
    }
}

/// Aggregates at an ISO-8601 as-of time with default configuration.
///
/// # Errors
///
/// `InvalidTimestamp` if `as_of_iso` cannot be parsed.
pub fn aggregate(investments: &[Investment], as_of_iso: &str) -> PortfolioResult<PortfolioSnapshot> {
    let as_of = AsOf::parse(as_of_iso)?;
    PortfolioAggregator::default().aggregate(investments, as_of)
}
