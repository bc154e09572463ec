//! Portfolio command implementation.
//!
//! Aggregates every investment in a file into dashboard totals.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use bondvest_portfolio::{InvestmentView, PortfolioAggregator, PortfolioSnapshot, SeriesPoint};

use crate::cli::OutputFormat;
use crate::commands::{load_investments, Context};
use crate::output::{format_money, print_header, print_json, print_table, KeyValue};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Investment file (JSON array)
    pub file: PathBuf,

    /// Show the monthly earnings history
    #[arg(long)]
    pub series: bool,
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Lockup")]
    lockup: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Current Value")]
    current_value: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
}

impl From<&InvestmentView> for HoldingRow {
    fn from(view: &InvestmentView) -> Self {
        Self {
            id: view.investment.id.clone(),
            status: view.status.label.clone(),
            lockup: view.investment.lockup_period.to_string(),
            frequency: view.investment.payment_frequency.to_string(),
            amount: format_money(view.investment.amount),
            current_value: format_money(view.value.current_value),
            earnings: format_money(view.value.total_earnings),
        }
    }
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total Earnings")]
    total_earnings: String,
}

impl From<&SeriesPoint> for SeriesRow {
    fn from(point: &SeriesPoint) -> Self {
        Self {
            date: point.date.to_string(),
            total_earnings: format_money(point.total_earnings),
        }
    }
}

fn summary(snapshot: &PortfolioSnapshot) -> Vec<KeyValue> {
    vec![
        KeyValue::new("As Of", snapshot.as_of.to_string()),
        KeyValue::new("Investments", snapshot.investment_count.to_string()),
        KeyValue::from_money("Total Invested", snapshot.total_invested),
        KeyValue::from_money("Pending", snapshot.total_pending),
        KeyValue::from_money("Current Value", snapshot.total_current_value),
        KeyValue::from_money("Total Earnings", snapshot.total_earnings),
        KeyValue::from_money("  Compounding", snapshot.compounding_earnings),
        KeyValue::from_money("  Monthly", snapshot.monthly_earnings),
        KeyValue::from_money("Expected Monthly Income", snapshot.expected_monthly_income),
    ]
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, ctx: &Context) -> Result<()> {
    let investments = load_investments(&args.file)?;
    let snapshot =
        PortfolioAggregator::new(ctx.config.clone()).aggregate(&investments, ctx.as_of)?;

    match ctx.format {
        OutputFormat::Table => {
            print_header("Portfolio Summary");
            print_table(&summary(&snapshot));

            print_header("Investments");
            let rows: Vec<HoldingRow> = snapshot.investments.iter().map(HoldingRow::from).collect();
            print_table(&rows);

            if args.series {
                print_header("Earnings History");
                let rows: Vec<SeriesRow> = snapshot.series.iter().map(SeriesRow::from).collect();
                print_table(&rows);
            }
        }
        OutputFormat::Json => print_json(&snapshot)?,
    }

    Ok(())
}
