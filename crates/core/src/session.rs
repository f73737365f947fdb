//! The caring-session value object.

use carelog_types::{CareType, Notes};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled care event for a patient.
///
/// Immutable once constructed: there is no update-in-place, so changing a
/// session means deleting it and adding a corrected one. Two sessions are
/// considered *overlapping* when date, time, and care type all match;
/// notes are excluded from that key but participate in full value equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaringSession {
    date: NaiveDate,
    time: NaiveTime,
    care_type: CareType,
    #[serde(default)]
    notes: Notes,
}

impl CaringSession {
    /// Creates a new caring session.
    pub fn new(date: NaiveDate, time: NaiveTime, care_type: CareType, notes: Notes) -> Self {
        Self {
            date,
            time,
            care_type,
            notes,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn care_type(&self) -> &CareType {
        &self.care_type
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Returns `true` when `other` occupies the same slot: equal date, time,
    /// and care type. `CareType` is stored lowercase, so equality here is the
    /// case-insensitive comparison of the original inputs.
    pub fn overlaps(&self, other: &CaringSession) -> bool {
        self.date == other.date && self.time == other.time && self.care_type == other.care_type
    }

    /// Renders the time without seconds, as shown to the user.
    pub fn display_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl std::fmt::Display for CaringSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {} at {}",
            self.care_type,
            self.date,
            self.display_time()
        )?;
        if !self.notes.is_empty() {
            write!(f, " ({})", self.notes)?;
        }
        Ok(())
    }
}
