//! Add a caring session to a patient.

use crate::clock::Clock;
use crate::error::{SessionError, SessionResult};
use crate::index::Index;
use crate::model::Model;
use crate::parser::{
    fields, tokenize, PREFIX_DATE, PREFIX_NOTES, PREFIX_TIME, PREFIX_TYPE,
};
use crate::session::CaringSession;

/// Adds a caring session for a patient identified by display index.
#[derive(Debug)]
pub struct AddSessionCommand {
    patient_index: Index,
    session: CaringSession,
}

impl AddSessionCommand {
    pub const USAGE: &'static str = "add-session: Adds a caring session for a patient.\n\
        Parameters: PATIENT_INDEX d/DATE t/TIME type/CARE_TYPE [notes/NOTES]\n\
        Example: add-session 1 d/2025-10-16 t/14:30 type/medication notes/Give insulin shot";

    /// Parses the raw argument string into a validated command.
    ///
    /// The preamble must be exactly one token (the patient index) and the
    /// date, time, and type fields must all be present. Fields are then
    /// validated in order: index, date, time, type, notes; the first
    /// violated constraint surfaces as that field's specific error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidCommandFormat` for wrong token shape,
    /// or the field-specific error for the first invalid field.
    pub fn parse(args: &str, clock: &dyn Clock) -> SessionResult<Self> {
        let tokens = tokenize(
            args,
            &[PREFIX_DATE, PREFIX_TIME, PREFIX_TYPE, PREFIX_NOTES],
        );

        let preamble = tokens.preamble_tokens();
        let all_present = [PREFIX_DATE, PREFIX_TIME, PREFIX_TYPE]
            .into_iter()
            .all(|p| tokens.value(p).is_some());
        if preamble.len() != 1 || !all_present || tokens.has_duplicate_prefixes() {
            return Err(SessionError::InvalidCommandFormat { usage: Self::USAGE });
        }

        let patient_index = fields::parse_index(preamble[0])?;
        let date = fields::parse_date(tokens.value(PREFIX_DATE).unwrap_or_default(), clock)?;
        let time = fields::parse_time(tokens.value(PREFIX_TIME).unwrap_or_default())?;
        let care_type = fields::parse_care_type(tokens.value(PREFIX_TYPE).unwrap_or_default())?;
        let notes = fields::parse_notes(tokens.value(PREFIX_NOTES))?;

        Ok(Self {
            patient_index,
            session: CaringSession::new(date, time, care_type, notes),
        })
    }

    /// Resolves the patient, checks for an overlapping session, and commits.
    ///
    /// The overlap check runs strictly before the append; on any failure the
    /// patient's session collection is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PatientIndexOutOfRange` when the index does
    /// not resolve against the displayed list, and
    /// `SessionError::DuplicateSession` when the patient already has a
    /// session with the same date, time, and care type.
    pub fn execute(&self, model: &mut Model) -> SessionResult<String> {
        let patient = model.patient_at_mut(self.patient_index)?;

        if patient.has_overlapping_session(&self.session) {
            return Err(SessionError::DuplicateSession);
        }

        patient.add_caring_session(self.session.clone());
        tracing::debug!(
            patient = patient.name().as_str(),
            session = %self.session,
            "caring session added"
        );

        Ok(format!(
            "Caring session added for {}: {} on {} at {} ({})",
            patient.name(),
            self.session.care_type(),
            self.session.date(),
            self.session.display_time(),
            self.session.notes()
        ))
    }
}
