//! The evaluation timestamp every calculation runs against.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A UTC instant against which accrual and status are evaluated.
///
/// The instant may be real wall-clock time or an administrator-simulated
/// time; the engine cannot tell the difference and does not need to.
///
/// # Example
///
/// ```rust
/// use bondvest_core::types::AsOf;
///
/// let confirmed = AsOf::parse("2024-01-31").unwrap();
/// let as_of = AsOf::parse("2024-03-30T12:00:00Z").unwrap();
/// assert_eq!(as_of.whole_months_since(confirmed), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AsOf(DateTime<Utc>);

impl AsOf {
    /// Wraps a UTC instant.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        AsOf(instant)
    }

    /// Parses an ISO-8601 timestamp.
    ///
    /// Accepts RFC 3339 with an offset, a naive date-time (taken as UTC),
    /// or a bare `YYYY-MM-DD` date (midnight UTC).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTimestamp` if none of the forms match.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(AsOf(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(AsOf(Utc.from_utc_datetime(&naive)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::start_of_day(date.into()));
        }

        Err(CoreError::invalid_timestamp(s))
    }

    /// Midnight UTC on the given date.
    #[must_use]
    pub fn start_of_day(date: Date) -> Self {
        AsOf(Utc.from_utc_datetime(&date.as_naive_date().and_time(NaiveTime::MIN)))
    }

    /// The last representable second of the given date, UTC.
    #[must_use]
    pub fn end_of_day(date: Date) -> Self {
        let time = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        AsOf(Utc.from_utc_datetime(&date.as_naive_date().and_time(time)))
    }

    /// Returns the wrapped instant.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the UTC calendar date of this instant.
    #[must_use]
    pub fn date(&self) -> Date {
        self.0.date_naive().into()
    }

    /// Adds calendar months, clamping the day to the end of the target month.
    ///
    /// Returns `None` if the result is out of range.
    #[must_use]
    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(AsOf)
    }

    /// Adds whole days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(AsOf)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} plus {days} days is out of range"))
            })
    }

    /// Shifts the instant by an arbitrary signed duration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn shifted(&self, offset: Duration) -> CoreResult<Self> {
        self.0
            .checked_add_signed(offset)
            .map(AsOf)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} shifted by {offset} is out of range"))
            })
    }

    /// Whole calendar months from `start` to `self`, floored and never negative.
    ///
    /// This is the largest `n` with `start + n months <= self`, using the same
    /// clamped month addition as [`AsOf::add_months`].
    #[must_use]
    pub fn whole_months_since(&self, start: AsOf) -> u32 {
        if self.0 <= start.0 {
            return 0;
        }

        // Year/month difference is an upper bound; step back past partial months.
        let upper = (self.0.year() - start.0.year()) * 12 + self.0.month() as i32
            - start.0.month() as i32;
        let mut months = upper.max(0) as u32;
        while months > 0 && start.add_months(months).map_or(true, |end| end > *self) {
            months -= 1;
        }
        months
    }
}

impl fmt::Display for AsOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for AsOf {
    fn from(instant: DateTime<Utc>) -> Self {
        AsOf(instant)
    }
}

impl std::str::FromStr for AsOf {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AsOf::parse(s)
    }
}
