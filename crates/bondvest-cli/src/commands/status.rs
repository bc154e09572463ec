//! Status command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use bondvest_accrual::{StatusResolver, StatusResult};

use crate::cli::OutputFormat;
use crate::commands::{load_investments, select, Context};
use crate::output::{format_flag, format_opt, print_header, print_json, print_table};

/// Arguments for the status command.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Investment file (JSON array)
    pub file: PathBuf,

    /// Only this investment
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    label: String,
    #[tabled(rename = "Locked")]
    locked: &'static str,
    #[tabled(rename = "Withdrawable")]
    withdrawable: &'static str,
    #[tabled(rename = "Confirmed")]
    confirmed: String,
    #[tabled(rename = "Lockup Ends")]
    lockup_ends: String,
    #[tabled(rename = "Payout Due")]
    payout_due: String,
    #[tabled(rename = "Days Left")]
    days_left: String,
}

impl From<&StatusResult> for StatusRow {
    fn from(status: &StatusResult) -> Self {
        let dates = &status.lifecycle;
        Self {
            id: status.investment_id.clone(),
            label: status.label.clone(),
            locked: format_flag(status.is_locked),
            withdrawable: format_flag(status.is_withdrawable),
            confirmed: format_opt(dates.confirmed_on),
            lockup_ends: format_opt(dates.lockup_ends_on),
            payout_due: format_opt(dates.payout_due_on),
            days_left: format_opt(dates.notice_days_remaining),
        }
    }
}

/// Execute the status command.
pub fn execute(args: StatusArgs, ctx: &Context) -> Result<()> {
    let investments = select(load_investments(&args.file)?, args.id.as_deref())?;
    let resolver = StatusResolver::new(ctx.config.accrual.clone());

    let statuses = investments
        .iter()
        .map(|investment| resolver.resolve(investment, ctx.as_of))
        .collect::<Result<Vec<_>, _>>()?;

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Investment Status as of {}", ctx.as_of));
            let rows: Vec<StatusRow> = statuses.iter().map(StatusRow::from).collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&statuses)?,
    }

    Ok(())
}
