//! Calendar date type for lifecycle arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{CoreError, CoreResult};

/// A calendar date, used for lockup ends, payout deadlines and chart points.
///
/// This is a newtype wrapper around `chrono::NaiveDate` that carries the
/// calendar-month arithmetic the lifecycle rules depend on.
///
/// # Example
///
/// ```rust
/// use bondvest_core::types::Date;
///
/// let confirmed = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = confirmed.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} plus {days} days is out of range"))
            })
    }

    /// Adds a number of calendar months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
