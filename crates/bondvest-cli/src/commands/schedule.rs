//! Schedule command implementation.
//!
//! Lists monthly accrual events for one investment and estimates what a
//! withdrawal would pay out.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondvest_accrual::{AccrualEngine, PayoutEstimate, ScheduledPayment};

use crate::cli::OutputFormat;
use crate::commands::{load_investments, select, Context};
use crate::output::{format_money, print_header, print_json, print_table, KeyValue};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Investment file (JSON array)
    pub file: PathBuf,

    /// Investment to schedule
    #[arg(long)]
    pub id: String,

    /// Number of months (default: the full lockup term)
    #[arg(long)]
    pub periods: Option<u32>,
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    period: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl From<&ScheduledPayment> for ScheduleRow {
    fn from(payment: &ScheduledPayment) -> Self {
        Self {
            period: payment.period,
            date: payment.date.to_string(),
            interest: format_money(payment.interest),
            balance: format_money(payment.balance),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleOutput {
    schedule: Vec<ScheduledPayment>,
    payout: PayoutEstimate,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let investments = select(load_investments(&args.file)?, Some(&args.id))?;
    let engine = AccrualEngine::new(ctx.config.accrual.clone());

    let mut output = Vec::with_capacity(investments.len());
    for investment in &investments {
        let schedule = match args.periods {
            Some(periods) => engine.payment_schedule(investment, periods)?,
            None => engine.lockup_schedule(investment)?,
        };
        let payout = engine.projected_payout(investment, ctx.as_of)?;
        output.push(ScheduleOutput { schedule, payout });
    }

    match ctx.format {
        OutputFormat::Table => {
            for item in &output {
                print_header(&format!("Accrual Schedule: {}", item.payout.investment_id));
                let rows: Vec<ScheduleRow> = item.schedule.iter().map(ScheduleRow::from).collect();
                print_table(&rows);

                print_header("Withdrawal Payout Estimate");
                print_table(&[
                    KeyValue::new("Payout Due", item.payout.payout_due.to_string()),
                    KeyValue::from_money("Principal", item.payout.principal),
                    KeyValue::from_money("Earnings", item.payout.earnings),
                    KeyValue::from_money("Amount", item.payout.amount),
                ]);
            }
        }
        OutputFormat::Json => match output.as_slice() {
            [single] => print_json(single)?,
            many => print_json(many)?,
        },
    }

    Ok(())
}
