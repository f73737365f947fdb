//! The patient entity.
//!
//! A patient owns an ordered collection of caring sessions. The collection is
//! not exposed for direct mutation; commands go through the narrow
//! capabilities below so the overlap-check-then-append sequence stays in one
//! place.

use crate::error::{SessionError, SessionResult};
use crate::index::Index;
use crate::session::CaringSession;
use carelog_types::PatientName;
use serde::{Deserialize, Serialize};

/// A patient being cared for, with their scheduled sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    name: PatientName,
    #[serde(default)]
    sessions: Vec<CaringSession>,
}

impl Patient {
    /// Creates a patient with no sessions.
    pub fn new(name: PatientName) -> Self {
        Self {
            name,
            sessions: Vec::new(),
        }
    }

    pub fn name(&self) -> &PatientName {
        &self.name
    }

    /// The patient's sessions in insertion order.
    pub fn sessions(&self) -> &[CaringSession] {
        &self.sessions
    }

    /// Returns `true` when an existing session occupies the same slot as
    /// `candidate` (same date, time, and care type; notes ignored).
    pub fn has_overlapping_session(&self, candidate: &CaringSession) -> bool {
        self.sessions.iter().any(|s| s.overlaps(candidate))
    }

    /// Appends a session to this patient's collection.
    ///
    /// Callers must run [`Patient::has_overlapping_session`] first; this
    /// method does not re-check.
    pub fn add_caring_session(&mut self, session: CaringSession) {
        self.sessions.push(session);
    }

    /// Removes and returns the session at the given display index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SessionIndexOutOfRange` if the index does not
    /// refer to an existing session; the collection is left untouched.
    pub fn remove_caring_session(&mut self, index: Index) -> SessionResult<CaringSession> {
        if index.zero_based() >= self.sessions.len() {
            return Err(SessionError::SessionIndexOutOfRange {
                index: index.one_based(),
            });
        }
        Ok(self.sessions.remove(index.zero_based()))
    }
}
