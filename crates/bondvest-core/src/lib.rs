//! # Bondvest Core
//!
//! Core types and abstractions for the Bondvest investment accrual engine.
//!
//! - **Types**: `Investment`, its terms and lifecycle status, ledger entries
//! - **Calendar**: `Date` with clamped calendar-month arithmetic, `AsOf` instants
//! - **Clock**: the `TimeSource` capability that supplies the as-of time
//! - **Records**: validation of loosely typed wire records into `Investment`
//!
//! ## Example
//!
//! ```rust
//! use bondvest_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let created = AsOf::parse("2024-01-01").unwrap();
//! let investment = Investment::new(
//!     "INV-1",
//!     dec!(10_000),
//!     LockupPeriod::OneYear,
//!     PaymentFrequency::Monthly,
//!     created,
//! );
//! assert_eq!(investment.bonds(), 1000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod clock;
pub mod error;
pub mod record;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clock::{FixedClock, SimulatedClock, SystemClock, TimeSource};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::record::{investments_from_records, InvestmentRecord, TransactionRecord};
    pub use crate::types::{
        AsOf, Date, Investment, InvestmentStatus, LockupPeriod, PaymentFrequency, Transaction,
        TransactionKind, TransactionStatus,
    };
}

// Re-export commonly used types at crate root
pub use clock::TimeSource;
pub use error::{CoreError, CoreResult};
pub use types::{AsOf, Date, Investment, InvestmentStatus, LockupPeriod, PaymentFrequency};
