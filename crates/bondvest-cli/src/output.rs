//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Formats a currency amount with two decimals.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Formats an optional value, `-` when absent.
pub fn format_opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Formats a flag as yes/no.
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a currency amount.
    pub fn from_money(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_money(value))
    }
}
