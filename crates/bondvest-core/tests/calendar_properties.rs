//! Property-based tests for calendar-month arithmetic.
//!
//! Month counting and month addition must agree, because lockup ends are
//! computed with one and withdrawability is checked with the other.

use bondvest_core::types::{AsOf, Date};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Date> {
    (2000i32..2060, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        let first = Date::from_ymd(y, m, 1).unwrap();
        Date::from_ymd(y, m, d.min(first.days_in_month())).unwrap()
    })
}

proptest! {
    #[test]
    fn months_since_agrees_with_add_months(start in date_strategy(), months in 0u32..120) {
        let start_at = AsOf::start_of_day(start);
        let end = start_at.add_months(months).unwrap();

        // Landing exactly on start + n months counts n whole months.
        prop_assert_eq!(end.whole_months_since(start_at), months);

        // One second earlier is still inside the previous month.
        if months > 0 {
            let just_before = AsOf::new(end.as_datetime() - chrono::Duration::seconds(1));
            prop_assert_eq!(just_before.whole_months_since(start_at), months - 1);
        }
    }

    #[test]
    fn months_since_is_monotone(start in date_strategy(), a in 0i64..2000, b in 0i64..2000) {
        let start_at = AsOf::start_of_day(start);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            start_at.add_days(lo).unwrap().whole_months_since(start_at)
                <= start_at.add_days(hi).unwrap().whole_months_since(start_at)
        );
    }

    #[test]
    fn date_and_instant_month_addition_agree(start in date_strategy(), months in 0u32..120) {
        let by_date = start.add_months(months as i32).unwrap();
        let by_instant = AsOf::start_of_day(start).add_months(months).unwrap().date();
        prop_assert_eq!(by_date, by_instant);
    }
}

#[test]
fn lockup_end_from_month_end() {
    let confirmed = Date::from_ymd(2024, 1, 31).unwrap();
    assert_eq!(confirmed.add_months(12).unwrap(), Date::from_ymd(2025, 1, 31).unwrap());
    assert_eq!(confirmed.add_months(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    assert_eq!(confirmed.add_months(13).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
}
