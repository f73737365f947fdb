//! Error taxonomy for the caring-session core.
//!
//! Every variant is user-facing and recoverable: a failed command is reported
//! and the process keeps accepting further commands. Validation failures are
//! kept distinguishable (e.g. a well-formed date in the past is `PastDate`,
//! not `InvalidDateFormat`) so callers and tests can tell them apart.

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid command format!\n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("Patient index {index} is out of range.")]
    PatientIndexOutOfRange { index: usize },
    #[error("Session index {index} is out of range.")]
    SessionIndexOutOfRange { index: usize },
    #[error("Date must be in YYYY-MM-DD or DD-MM-YYYY format.")]
    InvalidDateFormat,
    #[error("Cannot schedule sessions in the past.")]
    PastDate,
    #[error("Time must be in HH:MM format or 12-hour format with am/pm.")]
    InvalidTimeFormat,
    #[error("Care type must be 1-50 characters.")]
    CareTypeLength,
    #[error("Care type can only contain letters, numbers, spaces, and hyphens.")]
    CareTypeCharset,
    #[error("Notes cannot exceed 200 characters.")]
    NotesTooLong,
    #[error("Patient name cannot be empty.")]
    InvalidPatientName,
    #[error("Duplicate caring session: same date, time, and care type.")]
    DuplicateSession,

    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write data file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize records: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize records: {0}")]
    Deserialization(serde_json::Error),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
