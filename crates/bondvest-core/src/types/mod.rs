//! Domain types for investment accrual.
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`AsOf`]: UTC evaluation instant
//! - [`LockupPeriod`], [`PaymentFrequency`]: Investment terms
//! - [`InvestmentStatus`]: Lifecycle state
//! - [`Transaction`]: Ledger entry
//! - [`Investment`]: The entity itself

mod as_of;
mod date;
mod investment;
mod status;
mod terms;
mod transaction;

pub use as_of::AsOf;
pub use date::Date;
pub use investment::{Investment, BOND_DENOMINATION, MINIMUM_INVESTMENT, WITHDRAWAL_NOTICE_DAYS};
pub use status::InvestmentStatus;
pub use terms::{LockupPeriod, PaymentFrequency};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
