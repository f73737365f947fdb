//! Injected current-date capability.
//!
//! Past-date validation reads "today", which must be injectable so tests can
//! fix the clock deterministically instead of depending on wall-clock time.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
