//! Sources of the as-of time.
//!
//! Calculations never read an implicit "now". Callers obtain an [`AsOf`]
//! from a [`TimeSource`] and pass it in, so two calls made against different
//! simulated times in the same process cannot interfere.

use chrono::{DateTime, Duration, Utc};

use crate::error::CoreResult;
use crate::types::AsOf;

/// Something that can report the current as-of time.
pub trait TimeSource: Send + Sync {
    /// Returns a fresh timestamp; implementations must not cache it.
    fn now(&self) -> AsOf;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> AsOf {
        AsOf::new(Utc::now())
    }
}

/// A clock frozen at one instant. Used by tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(AsOf);

impl FixedClock {
    /// Creates a clock that always reports `at`.
    #[must_use]
    pub fn new(at: AsOf) -> Self {
        FixedClock(at)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> AsOf {
        self.0
    }
}

/// Administrator time machine: wall-clock time shifted by a fixed offset.
///
/// Time keeps moving while simulated, so a demo pinned "three months ahead"
/// stays three months ahead.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedClock {
    offset: Duration,
}

impl SimulatedClock {
    /// Shifts wall-clock time by `offset`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the shifted time is outside the
    /// representable calendar.
    pub fn with_offset(offset: Duration) -> CoreResult<Self> {
        SystemClock.now().shifted(offset)?;
        Ok(Self { offset })
    }

    /// Shifts wall-clock time so that it currently reads `target`.
    #[must_use]
    pub fn pinned_at(target: AsOf) -> Self {
        Self {
            offset: target.as_datetime() - Utc::now(),
        }
    }

    /// The configured offset from wall-clock time.
    #[must_use]
    pub fn offset(&self) -> Duration {
        self.offset
    }
}

impl TimeSource for SimulatedClock {
    fn now(&self) -> AsOf {
        let bound = if self.offset < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        // Saturates at the calendar bounds.
        AsOf::new(Utc::now().checked_add_signed(self.offset).unwrap_or(bound))
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> AsOf {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> AsOf {
        (**self).now()
    }
}
