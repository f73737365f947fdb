//! # Carelog Core
//!
//! Core business logic for the carelog caring-session tracker.
//!
//! This crate contains the domain model and command pipeline:
//! - Parsing and validation of session fields (date, time, care type, notes)
//! - The caring-session value object and its overlap rule
//! - Session commands: validate, resolve patient by display index,
//!   check-then-commit against the patient's session collection
//! - JSON persistence of the patient model
//!
//! **No UI concerns**: argument splitting below the raw-string level,
//! terminal output, and process wiring belong in `carelog-cli`.
//!
//! Execution is synchronous and command-at-a-time: commands take
//! `&mut Model`, so the overlap check and the commit in a session add cannot
//! interleave with another mutation of the same patient.

pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod patient;
pub mod session;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{resolve_data_file, CoreConfig};
pub use error::{SessionError, SessionResult};
pub use index::Index;
pub use model::Model;
pub use patient::Patient;
pub use session::CaringSession;
