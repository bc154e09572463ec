//! Cumulative earnings series for charting.
//!
//! The series samples the portfolio at the end of each of the previous
//! calendar months and finally at the as-of time itself. Each point sums the
//! lifetime earnings every investment had at that instant.

use bondvest_accrual::{AccrualEngine, AccrualResult};
use bondvest_core::types::{AsOf, Date, Investment, InvestmentStatus};
use bondvest_core::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AggregationConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::parallel::maybe_parallel_map;

/// Portfolio earnings at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Calendar date of the point.
    pub date: Date,
    /// Exact instant the point was evaluated at.
    pub at: AsOf,
    /// Sum of lifetime earnings at `at`.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_earnings: Decimal,
}

/// Instants sampled by a series of `points` points ending at `as_of`.
///
/// All but the last are end-of-day UTC on the last day of a preceding month,
/// oldest first.
pub fn sample_instants(as_of: AsOf, points: usize) -> PortfolioResult<Vec<AsOf>> {
    if points == 0 {
        return Ok(Vec::new());
    }
    let this_month = as_of.date().start_of_month();

    let mut instants = Vec::with_capacity(points);
    for back in (1..points).rev() {
        let back = i32::try_from(back)
            .map_err(|_| CoreError::configuration("series_points", points.to_string()))?;
        let month_end = this_month.add_months(-back)?.end_of_month();
        instants.push(AsOf::end_of_day(month_end));
    }
    instants.push(as_of);
    Ok(instants)
}

/// Lifetime earnings one investment had at `at`.
///
/// Withdrawn investments show live accrual up to their notice start (or
/// withdrawal time when no notice was recorded) and their frozen earnings from
/// then on.
pub fn earnings_at(
    engine: &AccrualEngine,
    investment: &Investment,
    at: AsOf,
) -> AccrualResult<Decimal> {
    if !investment.status.has_earnings() {
        return Ok(Decimal::ZERO);
    }
    let Some(confirmed) = investment.confirmed_at else {
        return Ok(Decimal::ZERO);
    };
    if confirmed > at {
        return Ok(Decimal::ZERO);
    }

    if investment.status == InvestmentStatus::Withdrawn {
        let still_held = investment
            .accrual_cutoff()
            .is_some_and(|cutoff| at < cutoff);
        if still_held {
            return Ok(engine.live_accrual(investment, at)?.total_earnings);
        }
    }
    Ok(engine.compute(investment, at)?.total_earnings)
}

/// Builds the cumulative earnings series. Empty for an empty portfolio.
pub fn earnings_series(
    investments: &[Investment],
    as_of: AsOf,
    engine: &AccrualEngine,
    config: &AggregationConfig,
) -> PortfolioResult<Vec<SeriesPoint>> {
    if investments.is_empty() {
        return Ok(Vec::new());
    }
    let instants = sample_instants(as_of, config.series_points)?;

    let totals = maybe_parallel_map(&instants, config, |&at| {
        investments
            .iter()
            .try_fold(Decimal::ZERO, |sum, investment| {
                let earnings = earnings_at(engine, investment, at)?;
                sum.checked_add(earnings)
                    .ok_or_else(|| PortfolioError::overflow("series earnings"))
            })
    });

    instants
        .into_iter()
        .zip(totals)
        .map(|(at, total)| {
            Ok(SeriesPoint {
                date: at.date(),
                at,
                total_earnings: total?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondvest_core::types::{LockupPeriod, PaymentFrequency};
    use rust_decimal_macros::dec;

    fn at(s: &str) -> AsOf {
        AsOf::parse(s).unwrap()
    }

    #[test]
    fn test_sample_instants() {
        let instants = sample_instants(at("2025-06-15T10:00:00Z"), 24).unwrap();
        assert_eq!(instants.len(), 24);
        assert_eq!(instants[0], at("2023-07-31T23:59:59Z"));
        assert_eq!(instants[22], at("2025-05-31T23:59:59Z"));
        assert_eq!(instants[23], at("2025-06-15T10:00:00Z"));
        assert!(instants.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_instants_february() {
        let instants = sample_instants(at("2024-03-01T00:00:00Z"), 3).unwrap();
        assert_eq!(instants[0].date(), Date::from_ymd(2024, 1, 31).unwrap());
        assert_eq!(instants[1].date(), Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_sample_instants_edge_counts() {
        assert!(sample_instants(at("2025-01-01"), 0).unwrap().is_empty());
        assert_eq!(sample_instants(at("2025-01-01"), 1).unwrap(), vec![at("2025-01-01")]);
    }

    #[test]
    fn test_earnings_before_confirmation_is_zero() {
        let inv = Investment::new(
            "C-1",
            dec!(10_000),
            LockupPeriod::ThreeYear,
            PaymentFrequency::Compounding,
            at("2024-01-01"),
        )
        .confirmed(at("2024-06-01"));
        let engine = AccrualEngine::default();

        assert_eq!(earnings_at(&engine, &inv, at("2024-05-31")).unwrap(), Decimal::ZERO);
        assert!(earnings_at(&engine, &inv, at("2024-09-01")).unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_withdrawn_live_then_frozen() {
        let inv = Investment::new(
            "W-1",
            dec!(10_000),
            LockupPeriod::OneYear,
            PaymentFrequency::Compounding,
            at("2023-01-01"),
        )
        .confirmed(at("2023-01-01"))
        .with_withdrawal_notice(at("2024-01-01"))
        .withdrawn(at("2024-03-31"), dec!(900));
        let engine = AccrualEngine::default();

        let live = earnings_at(&engine, &inv, at("2023-07-01")).unwrap();
        let expected = engine.live_accrual(&inv, at("2023-07-01")).unwrap().total_earnings;
        assert_eq!(live, expected);
        assert!(live > Decimal::ZERO && live < dec!(900));

        assert_eq!(earnings_at(&engine, &inv, at("2024-01-01")).unwrap(), dec!(900));
        assert_eq!(earnings_at(&engine, &inv, at("2025-01-01")).unwrap(), dec!(900));
    }

    #[test]
    fn test_drafts_contribute_nothing() {
        let inv = Investment::new(
            "D-1",
            dec!(5_000),
            LockupPeriod::OneYear,
            PaymentFrequency::Monthly,
            at("2024-01-01"),
        );
        let engine = AccrualEngine::default();
        assert_eq!(earnings_at(&engine, &inv, at("2025-01-01")).unwrap(), Decimal::ZERO);
    }
}
