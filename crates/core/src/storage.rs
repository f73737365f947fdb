//! JSON persistence for the patient model.
//!
//! The whole model is stored as one pretty-printed JSON file. Commands run
//! against the in-memory model; callers save only after a command succeeds,
//! so a failed command never changes what is on disk.

use crate::config::CoreConfig;
use crate::error::{SessionError, SessionResult};
use crate::model::Model;
use std::fs;

/// Loads the model from the configured data file.
///
/// A missing file is not an error: a first run starts from an empty model.
///
/// # Errors
///
/// Returns `SessionError::FileRead` if the file exists but cannot be read,
/// or `SessionError::Deserialization` if its contents are not a valid model.
pub fn load(cfg: &CoreConfig) -> SessionResult<Model> {
    let path = cfg.data_file();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file absent, starting empty");
        return Ok(Model::new());
    }

    let contents = fs::read_to_string(path).map_err(SessionError::FileRead)?;
    serde_json::from_str(&contents).map_err(SessionError::Deserialization)
}

/// Saves the model to the configured data file.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns `SessionError::Serialization` or `SessionError::FileWrite`.
pub fn save(cfg: &CoreConfig, model: &Model) -> SessionResult<()> {
    let path = cfg.data_file();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(SessionError::FileWrite)?;
        }
    }

    let contents = serde_json::to_string_pretty(model).map_err(SessionError::Serialization)?;
    fs::write(path, contents).map_err(SessionError::FileWrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::AddSessionCommand;
    use crate::index::Index;
    use crate::patient::Patient;
    use carelog_types::PatientName;
    use chrono::NaiveDate;

    #[test]
    fn missing_file_loads_empty_model() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CoreConfig::new(dir.path().join("absent.json")).unwrap();
        let model = load(&cfg).unwrap();
        assert!(model.filtered_patients().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_patients_and_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CoreConfig::new(dir.path().join("records/carelog.json")).unwrap();

        let mut model = Model::new();
        model.add_patient(Patient::new(PatientName::new("Alex Yeoh").unwrap()));
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        AddSessionCommand::parse("1 d/2025-10-16 t/14:30 type/medication notes/insulin", &clock)
            .unwrap()
            .execute(&mut model)
            .unwrap();

        save(&cfg, &model).unwrap();
        let reloaded = load(&cfg).unwrap();

        let patient = reloaded.patient_at(Index::from_one_based(1)).unwrap();
        assert_eq!(patient.name().as_str(), "Alex Yeoh");
        assert_eq!(patient.sessions().len(), 1);
        assert_eq!(patient.sessions()[0].care_type().as_str(), "medication");
        assert_eq!(patient.sessions()[0].notes().as_str(), "insulin");
    }

    #[test]
    fn corrupt_file_is_a_deserialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carelog.json");
        fs::write(&path, "not json").unwrap();
        let cfg = CoreConfig::new(path).unwrap();
        assert!(matches!(
            load(&cfg),
            Err(SessionError::Deserialization(_))
        ));
    }
}
