//! # Bondvest Portfolio
//!
//! Portfolio-level totals for a user's Bondvest investments.
//!
//! Every investment is valued with the same `AccrualEngine` and
//! `StatusResolver` that drive single-investment views; this crate only
//! decides which investments count toward which total.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: investments and the as-of time are explicit inputs
//! - **One source of truth**: no earnings arithmetic of its own
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Inclusion Rules
//!
//! | Status | Invested | Pending | Earnings | Current value |
//! |---|---|---|---|---|
//! | draft, pending | | yes | | |
//! | active, withdrawal_notice | yes | | yes | yes |
//! | withdrawn | | | yes | |
//! | rejected | | | | |
//!
//! ## Quick Start
//!
//! ```rust
//! use bondvest_core::prelude::*;
//! use bondvest_portfolio::aggregate;
//! use rust_decimal_macros::dec;
//!
//! let draft = Investment::new(
//!     "INV-1",
//!     dec!(5_000),
//!     LockupPeriod::OneYear,
//!     PaymentFrequency::Monthly,
//!     AsOf::parse("2024-12-01").unwrap(),
//! );
//!
//! let snapshot = aggregate(&[draft], "2025-01-01T00:00:00Z").unwrap();
//! assert_eq!(snapshot.total_pending, dec!(5_000));
//! assert_eq!(snapshot.total_invested, dec!(0));
//! assert_eq!(snapshot.series.len(), 24);
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregator`] - `PortfolioAggregator` and the `PortfolioSnapshot` it produces
//! - [`series`] - Monthly cumulative earnings series
//! - [`ordering`] - Display order (drafts first, then newest)
//! - [`config`] - `AggregationConfig`
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod ordering;
pub mod parallel;
pub mod series;

pub use aggregator::{aggregate, InvestmentView, PortfolioAggregator, PortfolioSnapshot};
pub use config::{AggregationConfig, DEFAULT_SERIES_POINTS};
pub use error::{PortfolioError, PortfolioResult};
pub use ordering::{display_order, sort_for_display};
pub use series::SeriesPoint;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregator::{aggregate, InvestmentView, PortfolioAggregator, PortfolioSnapshot};
    pub use crate::config::AggregationConfig;
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::series::SeriesPoint;
    pub use bondvest_accrual::{AccrualConfig, NoticeAccrual};
}
