//! Integration tests for bondvest-portfolio.
//!
//! These tests run a realistic mixed-status portfolio from wire records
//! through validation, accrual and aggregation.

use bondvest_core::prelude::*;
use bondvest_portfolio::prelude::*;
use bondvest_portfolio::DEFAULT_SERIES_POINTS;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

const AS_OF: &str = "2025-06-15T12:00:00Z";

/// Monthly distributions of $80 on the 1st of each month, Apr 2024 to Jun 2025,
/// plus one rejected posting that must be ignored.
fn monthly_ledger() -> String {
    let mut entries = Vec::new();
    let mut date = Date::from_ymd(2024, 4, 1).unwrap();
    for k in 1..=15 {
        entries.push(format!(
            r#"{{"id": "M-D{k}", "type": "distribution", "amount": 80, "date": "{date}T00:00:00Z", "status": "received"}}"#
        ));
        date = date.add_months(1).unwrap();
    }
    entries.push(
        r#"{"id": "M-X", "type": "distribution", "amount": 80, "date": "2025-01-15T00:00:00Z", "status": "rejected"}"#
            .to_string(),
    );
    entries.join(",\n")
}

/// Six investments, one in every status.
fn portfolio_json() -> String {
    format!(
        r#"[
        {{"id": "D", "amount": 5000, "lockupPeriod": "1-year", "paymentFrequency": "monthly",
          "status": "draft", "createdAt": "2025-06-01T09:00:00Z"}},
        {{"id": "P", "amount": 2000, "lockupPeriod": "3-year", "paymentFrequency": "compounding",
          "status": "pending", "createdAt": "2025-06-10T09:00:00Z"}},
        {{"id": "M", "amount": 12000, "lockupPeriod": "1-year", "paymentFrequency": "monthly",
          "status": "active", "createdAt": "2024-02-25T09:00:00Z", "confirmedAt": "2024-03-01T00:00:00Z",
          "transactions": [{ledger}]}},
        {{"id": "C", "amount": 10000, "lockupPeriod": "3-year", "paymentFrequency": "compounding",
          "status": "active", "createdAt": "2024-06-14T09:00:00Z", "confirmedAt": "2024-06-15T00:00:00Z"}},
        {{"id": "W", "amount": 10000, "lockupPeriod": "1-year", "paymentFrequency": "compounding",
          "status": "withdrawn", "createdAt": "2023-01-05T09:00:00Z", "confirmedAt": "2023-01-10T00:00:00Z",
          "withdrawalNoticeStartAt": "2024-02-01T00:00:00Z", "payoutDueBy": "2024-05-01T00:00:00Z",
          "withdrawnAt": "2024-04-30T00:00:00Z", "totalEarnings": 850.00}},
        {{"id": "R", "amount": 3000, "lockupPeriod": "1-year", "paymentFrequency": "monthly",
          "status": "rejected", "createdAt": "2025-05-01T09:00:00Z"}}
    ]"#,
        ledger = monthly_ledger()
    )
}

fn load_portfolio() -> Vec<Investment> {
    let records: Vec<InvestmentRecord> = serde_json::from_str(&portfolio_json()).unwrap();
    investments_from_records(records).unwrap()
}

// =============================================================================
// TOTALS
// =============================================================================

#[test]
fn test_mixed_portfolio_totals() {
    let snapshot = aggregate(&load_portfolio(), AS_OF).unwrap();

    assert_eq!(snapshot.investment_count, 6);
    assert_eq!(snapshot.total_invested, dec!(22_000));
    assert_eq!(snapshot.total_pending, dec!(7_000));
    assert_eq!(snapshot.monthly_earnings, dec!(1_200));
    assert_eq!(snapshot.compounding_earnings, dec!(1_897.13));
    assert_eq!(snapshot.total_earnings, dec!(3_097.13));
    assert_eq!(snapshot.total_current_value, dec!(23_047.13));
    assert_eq!(snapshot.expected_monthly_income, dec!(80));
}

#[test]
fn test_rows_agree_with_totals() {
    let snapshot = aggregate(&load_portfolio(), AS_OF).unwrap();

    let earnings: Decimal = snapshot
        .investments
        .iter()
        .filter(|view| view.investment.status.has_earnings())
        .map(|view| view.value.total_earnings)
        .sum();
    assert_eq!(earnings, snapshot.total_earnings);

    let monthly = snapshot
        .investments
        .iter()
        .find(|view| view.investment.id == "M")
        .unwrap();
    assert_eq!(monthly.value.months_elapsed, 15);
    assert_eq!(monthly.value.realized_earnings, monthly.value.projected_earnings);
    assert!(monthly.status.is_withdrawable);
    assert_eq!(monthly.status.label, "Available for Withdrawal");
}

#[test]
fn test_display_order() {
    let snapshot = aggregate(&load_portfolio(), AS_OF).unwrap();
    let ids: Vec<&str> = snapshot
        .investments
        .iter()
        .map(|view| view.investment.id.as_str())
        .collect();
    assert_eq!(ids, vec!["D", "P", "R", "C", "M", "W"]);
}

// =============================================================================
// SERIES
// =============================================================================

#[test]
fn test_series_shape() {
    let snapshot = aggregate(&load_portfolio(), AS_OF).unwrap();
    let series = &snapshot.series;

    assert_eq!(series.len(), DEFAULT_SERIES_POINTS);
    assert_eq!(series[0].date, Date::from_ymd(2023, 7, 31).unwrap());
    assert_eq!(series[22].date, Date::from_ymd(2025, 5, 31).unwrap());
    assert_eq!(series[23].at, AsOf::parse(AS_OF).unwrap());
    assert_eq!(series[23].total_earnings, snapshot.total_earnings);
}

#[test]
fn test_series_values() {
    let snapshot = aggregate(&load_portfolio(), AS_OF).unwrap();
    let series = &snapshot.series;

    // Only the since-withdrawn investment existed: six months of live accrual.
    assert_eq!(series[0].total_earnings, dec!(406.73));
    // Last month-end before the withdrawal notice.
    assert_eq!(series[6].date, Date::from_ymd(2024, 1, 31).unwrap());
    assert_eq!(series[6].total_earnings, dec!(830.00));
    // Frozen from the notice onward.
    assert_eq!(series[7].total_earnings, dec!(850.00));

    assert!(series
        .windows(2)
        .all(|pair| pair[0].total_earnings <= pair[1].total_earnings));
}

// =============================================================================
// CLOCKS AND CONFIGURATION
// =============================================================================

#[test]
fn test_simulated_clock_matches_explicit_as_of() {
    let investments = load_portfolio();
    let target = AsOf::parse("2026-01-01T00:00:00Z").unwrap();
    let clock = SimulatedClock::pinned_at(target);

    let aggregator = PortfolioAggregator::default();
    let via_clock = aggregator.aggregate_now(&investments, &clock).unwrap();
    let explicit = aggregator.aggregate(&investments, via_clock.as_of).unwrap();

    assert_eq!(via_clock.total_earnings, explicit.total_earnings);
    assert_eq!(via_clock.total_current_value, explicit.total_current_value);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let investments: Vec<Investment> = (0..250)
        .flat_map(|_| load_portfolio())
        .collect();

    let sequential = PortfolioAggregator::new(AggregationConfig::sequential())
        .aggregate(&investments, AsOf::parse(AS_OF).unwrap())
        .unwrap();
    let parallel = PortfolioAggregator::new(AggregationConfig::default().with_threshold(10))
        .aggregate(&investments, AsOf::parse(AS_OF).unwrap())
        .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.total_invested, dec!(22_000) * dec!(250));
}

#[test]
fn test_unknown_lockup_rejected() {
    let json = r#"[{"id": "X", "amount": 1000, "lockupPeriod": "5-year",
        "paymentFrequency": "monthly", "status": "active", "createdAt": "2024-01-01"}]"#;
    let records: Vec<InvestmentRecord> = serde_json::from_str(json).unwrap();
    let err = investments_from_records(records).unwrap_err();
    assert_eq!(err, CoreError::configuration("lockupPeriod", "5-year"));
}
