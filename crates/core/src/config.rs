//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core operations. Environment variables are read only during resolution,
//! never while handling a command.

use crate::error::{SessionError, SessionResult};
use std::path::{Path, PathBuf};

/// Environment variable naming the data file.
pub const DATA_FILE_ENV: &str = "CARELOG_DATA_FILE";

/// Default data file, relative to the current working directory.
pub const DEFAULT_DATA_FILE: &str = "carelog.json";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(data_file: PathBuf) -> SessionResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(SessionError::InvalidInput(
                "data file path cannot be empty".into(),
            ));
        }
        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Resolve the data file path.
///
/// Precedence: explicit `override_path`, then the `CARELOG_DATA_FILE`
/// environment variable, then `carelog.json` in the current directory.
///
/// # Errors
///
/// Returns `SessionError::InvalidInput` if the resolved path is empty.
pub fn resolve_data_file(override_path: Option<PathBuf>) -> SessionResult<CoreConfig> {
    if let Some(path) = override_path {
        return CoreConfig::new(path);
    }

    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        return CoreConfig::new(PathBuf::from(path));
    }

    CoreConfig::new(PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_takes_precedence() {
        let cfg = resolve_data_file(Some(PathBuf::from("/tmp/records.json"))).unwrap();
        assert_eq!(cfg.data_file(), Path::new("/tmp/records.json"));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            CoreConfig::new(PathBuf::new()),
            Err(SessionError::InvalidInput(_))
        ));
    }
}
