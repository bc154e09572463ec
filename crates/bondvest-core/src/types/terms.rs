//! Investment terms: lockup period and payment frequency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Minimum holding period; fixes the annual percentage yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockupPeriod {
    /// 12-month lockup at 8% APY.
    #[serde(rename = "1-year")]
    OneYear,
    /// 36-month lockup at 10% APY.
    #[serde(rename = "3-year")]
    ThreeYear,
}

impl LockupPeriod {
    /// Annual percentage yield as a decimal fraction.
    #[must_use]
    pub fn apy(&self) -> Decimal {
        match self {
            LockupPeriod::OneYear => dec!(0.08),
            LockupPeriod::ThreeYear => dec!(0.10),
        }
    }

    /// `apy / 12`, unrounded.
    #[must_use]
    pub fn monthly_rate(&self) -> Decimal {
        self.apy() / Decimal::from(12)
    }

    /// Length of the lockup in calendar months.
    #[must_use]
    pub fn term_months(&self) -> u32 {
        match self {
            LockupPeriod::OneYear => 12,
            LockupPeriod::ThreeYear => 36,
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LockupPeriod::OneYear => "1-year",
            LockupPeriod::ThreeYear => "3-year",
        }
    }
}

impl fmt::Display for LockupPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockupPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-year" => Ok(LockupPeriod::OneYear),
            "3-year" => Ok(LockupPeriod::ThreeYear),
            other => Err(CoreError::configuration("lockupPeriod", other)),
        }
    }
}

/// How earned interest is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// Interest paid out as a monthly cash distribution; principal stays flat.
    Monthly,
    /// Interest credited back into principal every month.
    Compounding,
}

impl PaymentFrequency {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Compounding => "compounding",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "compounding" => Ok(PaymentFrequency::Compounding),
            other => Err(CoreError::configuration("paymentFrequency", other)),
        }
    }
}
