//! # Bondvest Accrual
//!
//! Value, earnings and lifecycle status of a single investment at an explicit
//! as-of time.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: the investment and as-of time are inputs; nothing is cached
//! - **Decimal arithmetic**: rounding to cents happens once, on output
//! - **Explicit clock**: "now" comes from a caller-supplied `TimeSource`
//!
//! ## Module Overview
//!
//! - [`engine`] - `AccrualEngine`: current value, realized and projected earnings
//! - [`status`] - `StatusResolver`: labels, locked/active flags, lifecycle dates
//! - [`lockup`] - Lockup-end arithmetic and currency rounding shared by both
//! - [`config`] - `AccrualConfig`, including the notice-window accrual mode
//!
//! ## Quick Start
//!
//! ```rust
//! use bondvest_accrual::{compute_value, resolve_status};
//! use bondvest_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let investment = Investment::new(
//!     "INV-1",
//!     dec!(10_000),
//!     LockupPeriod::OneYear,
//!     PaymentFrequency::Monthly,
//!     AsOf::parse("2024-01-01").unwrap(),
//! )
//! .confirmed(AsOf::parse("2024-01-02").unwrap());
//!
//! let value = compute_value(&investment, "2024-06-01T00:00:00Z").unwrap();
//! assert_eq!(value.monthly_interest_amount, dec!(66.67));
//!
//! let status = resolve_status(&investment, "2024-06-01T00:00:00Z").unwrap();
//! assert_eq!(status.label, "Active");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod lockup;
pub mod status;

pub use config::{AccrualConfig, NoticeAccrual};
pub use engine::{compute_value, AccrualEngine, PayoutEstimate, ScheduledPayment, ValueResult};
pub use error::{AccrualError, AccrualResult};
pub use lockup::round_currency;
pub use status::{resolve_status, status_label, LifecycleDates, StatusResolver, StatusResult};
