//! Value command implementation.
//!
//! Shows current value and earnings for each investment in a file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use bondvest_accrual::{AccrualEngine, ValueResult};

use crate::cli::OutputFormat;
use crate::commands::{load_investments, select, Context};
use crate::output::{format_flag, format_money, format_opt, print_header, print_json, print_table};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Investment file (JSON array)
    pub file: PathBuf,

    /// Only this investment
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Current Value")]
    current_value: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
    #[tabled(rename = "Realized")]
    realized: String,
    #[tabled(rename = "Projected")]
    projected: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Lockup Ends")]
    lockup_end: String,
    #[tabled(rename = "Withdrawable")]
    withdrawable: &'static str,
}

impl From<&ValueResult> for ValueRow {
    fn from(value: &ValueResult) -> Self {
        Self {
            id: value.investment_id.clone(),
            current_value: format_money(value.current_value),
            earnings: format_money(value.total_earnings),
            realized: format_money(value.realized_earnings),
            projected: format_money(value.projected_earnings),
            monthly: format_money(value.monthly_interest_amount),
            months: value.months_elapsed,
            lockup_end: format_opt(value.lockup_end_date),
            withdrawable: format_flag(value.is_withdrawable),
        }
    }
}

/// Execute the value command.
pub fn execute(args: ValueArgs, ctx: &Context) -> Result<()> {
    let investments = select(load_investments(&args.file)?, args.id.as_deref())?;
    let engine = AccrualEngine::new(ctx.config.accrual.clone());

    let values = investments
        .iter()
        .map(|investment| engine.compute(investment, ctx.as_of))
        .collect::<Result<Vec<_>, _>>()?;

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Investment Values as of {}", ctx.as_of));
            let rows: Vec<ValueRow> = values.iter().map(ValueRow::from).collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&values)?,
    }

    Ok(())
}
