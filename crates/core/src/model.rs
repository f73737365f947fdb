//! In-memory patient list and its displayed view.
//!
//! Commands never address patients by a persistent identifier; they use the
//! 1-based position in the *currently displayed* list, which may be a
//! filtered view of the full store. All display-index resolution therefore
//! lives here, so a filtered `list` and a follow-up `add-session 1 ...`
//! agree on which patient "1" is.

use crate::error::{SessionError, SessionResult};
use crate::index::Index;
use crate::patient::Patient;
use serde::{Deserialize, Serialize};

/// The patient store plus the active display filter.
///
/// The filter is a session-level display concern and is not persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Model {
    patients: Vec<Patient>,
    #[serde(skip)]
    filter: Option<String>,
}

impl Model {
    /// Creates an empty model with no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a patient to the store.
    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    /// Restricts the displayed view to patients whose name contains
    /// `keyword`, case-insensitively. An empty keyword clears the filter.
    pub fn set_filter(&mut self, keyword: &str) {
        let trimmed = keyword.trim();
        self.filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
    }

    /// The displayed view: all patients, or the filtered subset.
    pub fn filtered_patients(&self) -> Vec<&Patient> {
        self.filtered_offsets()
            .into_iter()
            .map(|i| &self.patients[i])
            .collect()
    }

    /// Resolves a display index against the filtered view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PatientIndexOutOfRange` if the index exceeds
    /// the displayed list.
    pub fn patient_at(&self, index: Index) -> SessionResult<&Patient> {
        let offsets = self.filtered_offsets();
        let offset = *offsets
            .get(index.zero_based())
            .ok_or(SessionError::PatientIndexOutOfRange {
                index: index.one_based(),
            })?;
        Ok(&self.patients[offset])
    }

    /// Like [`Model::patient_at`], but resolves to the underlying patient
    /// for mutation.
    pub fn patient_at_mut(&mut self, index: Index) -> SessionResult<&mut Patient> {
        let offsets = self.filtered_offsets();
        let offset = *offsets
            .get(index.zero_based())
            .ok_or(SessionError::PatientIndexOutOfRange {
                index: index.one_based(),
            })?;
        Ok(&mut self.patients[offset])
    }

    /// Removes and returns the patient at the given display index.
    pub fn delete_patient(&mut self, index: Index) -> SessionResult<Patient> {
        let offsets = self.filtered_offsets();
        let offset = *offsets
            .get(index.zero_based())
            .ok_or(SessionError::PatientIndexOutOfRange {
                index: index.one_based(),
            })?;
        Ok(self.patients.remove(offset))
    }

    fn filtered_offsets(&self) -> Vec<usize> {
        match &self.filter {
            None => (0..self.patients.len()).collect(),
            Some(keyword) => self
                .patients
                .iter()
                .enumerate()
                .filter(|(_, p)| p.name().as_str().to_lowercase().contains(keyword))
                .map(|(i, _)| i)
                .collect(),
        }
    }
}
