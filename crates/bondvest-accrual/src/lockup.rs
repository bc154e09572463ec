//! Lockup and rounding helpers shared by the engine and the status resolver.

use bondvest_core::types::{AsOf, Investment, InvestmentStatus};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{AccrualError, AccrualResult};

/// Rounds a currency amount to cents, halves away from zero.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Instant the lockup ends: confirmation plus the term in calendar months.
///
/// `None` when the investment has not been confirmed.
pub fn lockup_end(investment: &Investment) -> AccrualResult<Option<AsOf>> {
    let term = investment.lockup_period.term_months();
    investment
        .confirmed_at
        .map(|confirmed| {
            confirmed
                .add_months(term)
                .ok_or_else(|| AccrualError::date_overflow(&investment.id, term))
        })
        .transpose()
}

/// Whole months of accrual at `as_of`; zero before confirmation.
#[must_use]
pub fn months_elapsed(investment: &Investment, as_of: AsOf) -> u32 {
    investment
        .confirmed_at
        .map_or(0, |confirmed| as_of.whole_months_since(confirmed))
}

/// An active investment that has served its full lockup.
#[must_use]
pub fn is_withdrawable(investment: &Investment, as_of: AsOf) -> bool {
    investment.status == InvestmentStatus::Active
        && investment.confirmed_at.is_some()
        && months_elapsed(investment, as_of) >= investment.lockup_period.term_months()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondvest_core::types::{Date, LockupPeriod, PaymentFrequency};
    use rust_decimal_macros::dec;

    fn at(s: &str) -> AsOf {
        AsOf::parse(s).unwrap()
    }

    fn active(confirmed: &str, lockup: LockupPeriod) -> Investment {
        Investment::new(
            "INV-1",
            dec!(10_000),
            lockup,
            PaymentFrequency::Monthly,
            at("2024-01-01"),
        )
        .confirmed(at(confirmed))
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(dec!(66.665)), dec!(66.67));
        assert_eq!(round_currency(dec!(66.664999)), dec!(66.66));
        assert_eq!(round_currency(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_currency(dec!(12)), dec!(12));
    }

    #[test]
    fn test_lockup_end_month_end() {
        let inv = active("2024-01-31", LockupPeriod::OneYear);
        let end = lockup_end(&inv).unwrap().unwrap();
        assert_eq!(end.date(), Date::from_ymd(2025, 1, 31).unwrap());

        let inv = active("2024-02-29", LockupPeriod::ThreeYear);
        let end = lockup_end(&inv).unwrap().unwrap();
        assert_eq!(end.date(), Date::from_ymd(2027, 2, 28).unwrap());
    }

    #[test]
    fn test_lockup_end_unconfirmed() {
        let inv = Investment::new(
            "INV-2",
            dec!(1000),
            LockupPeriod::OneYear,
            PaymentFrequency::Compounding,
            at("2024-01-01"),
        );
        assert_eq!(lockup_end(&inv).unwrap(), None);
        assert_eq!(months_elapsed(&inv, at("2030-01-01")), 0);
    }

    #[test]
    fn test_withdrawable_boundary() {
        let inv = active("2024-01-15", LockupPeriod::OneYear);
        assert_eq!(months_elapsed(&inv, at("2025-01-14")), 11);
        assert!(!is_withdrawable(&inv, at("2025-01-14")));
        assert_eq!(months_elapsed(&inv, at("2025-01-15")), 12);
        assert!(is_withdrawable(&inv, at("2025-01-15")));
    }

    #[test]
    fn test_only_active_is_withdrawable() {
        let inv = active("2020-01-15", LockupPeriod::OneYear)
            .with_withdrawal_notice(at("2021-06-01"));
        assert!(!is_withdrawable(&inv, at("2022-01-01")));
    }
}
