//! Delete a caring session by patient and session index.

use crate::error::{SessionError, SessionResult};
use crate::index::Index;
use crate::model::Model;
use crate::parser::fields;

/// Deletes a caring session identified by two 1-based display indices.
#[derive(Debug)]
pub struct DeleteSessionCommand {
    patient_index: Index,
    session_index: Index,
}

impl DeleteSessionCommand {
    pub const USAGE: &'static str = "delete-session: Deletes a caring session from a patient.\n\
        Parameters: PATIENT_INDEX SESSION_INDEX\n\
        Example: delete-session 1 2";

    /// Parses exactly two positional index tokens.
    ///
    /// # Errors
    ///
    /// Any malformed input (wrong token count, non-numeric, non-positive) is
    /// reported as a single `SessionError::InvalidCommandFormat` carrying
    /// the usage string.
    pub fn parse(args: &str) -> SessionResult<Self> {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(SessionError::InvalidCommandFormat { usage: Self::USAGE });
        }

        let parse_both = || -> SessionResult<(Index, Index)> {
            Ok((fields::parse_index(tokens[0])?, fields::parse_index(tokens[1])?))
        };
        let (patient_index, session_index) = parse_both()
            .map_err(|_| SessionError::InvalidCommandFormat { usage: Self::USAGE })?;

        Ok(Self {
            patient_index,
            session_index,
        })
    }

    /// Resolves the patient and removes the addressed session.
    ///
    /// # Errors
    ///
    /// `SessionError::PatientIndexOutOfRange` when the patient index does
    /// not resolve, `SessionError::SessionIndexOutOfRange` when the session
    /// index does not; either way nothing is mutated.
    pub fn execute(&self, model: &mut Model) -> SessionResult<String> {
        let patient = model.patient_at_mut(self.patient_index)?;
        let removed = patient.remove_caring_session(self.session_index)?;

        tracing::debug!(
            patient = patient.name().as_str(),
            session = %removed,
            "caring session deleted"
        );

        Ok(format!(
            "Deleted caring session for {}: {}",
            patient.name(),
            removed
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::AddSessionCommand;
    use crate::patient::Patient;
    use carelog_types::PatientName;
    use chrono::NaiveDate;

    fn model_with_session() -> Model {
        let mut model = Model::new();
        model.add_patient(Patient::new(PatientName::new("Alex Yeoh").unwrap()));
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        AddSessionCommand::parse(
            "1 d/2025-10-16 t/14:30 type/medication notes/insulin",
            &clock,
        )
        .unwrap()
        .execute(&mut model)
        .unwrap();
        model
    }

    #[test]
    fn parses_two_positional_indices() {
        let cmd = DeleteSessionCommand::parse(" 1  2 ").unwrap();
        assert_eq!(cmd.patient_index.one_based(), 1);
        assert_eq!(cmd.session_index.one_based(), 2);
    }

    #[test]
    fn malformed_input_is_a_single_generic_format_error() {
        for args in ["1", "1 2 3", "", "one 2", "1 0", "-1 2"] {
            assert!(matches!(
                DeleteSessionCommand::parse(args),
                Err(SessionError::InvalidCommandFormat { .. })
            ));
        }
    }

    #[test]
    fn format_error_message_carries_the_usage() {
        let err = DeleteSessionCommand::parse("1").expect_err("missing session index");
        let message = err.to_string();
        assert!(message.contains("delete-session"));
        assert!(message.contains("PATIENT_INDEX SESSION_INDEX"));
    }

    #[test]
    fn deletes_the_addressed_session() {
        let mut model = model_with_session();
        let message = DeleteSessionCommand::parse("1 1")
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(
            message,
            "Deleted caring session for Alex Yeoh: medication on 2025-10-16 at 14:30 (insulin)"
        );
        assert!(model
            .patient_at(Index::from_one_based(1))
            .unwrap()
            .sessions()
            .is_empty());
    }

    #[test]
    fn out_of_range_session_index_does_not_mutate() {
        let mut model = model_with_session();
        let err = DeleteSessionCommand::parse("1 2")
            .unwrap()
            .execute(&mut model)
            .expect_err("only one session");
        assert!(matches!(
            err,
            SessionError::SessionIndexOutOfRange { index: 2 }
        ));
        assert_eq!(
            model
                .patient_at(Index::from_one_based(1))
                .unwrap()
                .sessions()
                .len(),
            1
        );
    }

    #[test]
    fn out_of_range_patient_index_is_reported() {
        let mut model = model_with_session();
        assert!(matches!(
            DeleteSessionCommand::parse("2 1").unwrap().execute(&mut model),
            Err(SessionError::PatientIndexOutOfRange { index: 2 })
        ));
    }
}
