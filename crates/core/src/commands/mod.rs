//! Session commands.
//!
//! Each command is a value parsed from raw CLI arguments, then executed
//! against the model. The pipeline is strictly validate-then-commit: every
//! constraint is checked before any mutation, so a failed command leaves the
//! stored data exactly as it was.

mod add_session;
mod delete_session;

pub use add_session::AddSessionCommand;
pub use delete_session::DeleteSessionCommand;
