//! Roster error types
//!
//! Absence of a record is the only failure the store can report, and it is
//! always recoverable: the driver turns it into a user-facing message and
//! the session continues. Malformed input never reaches the store (the
//! driver parses first), and the store performs no I/O that could fail.

use thiserror::Error;

use super::record::StudentId;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors reported by the record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No live record carries the requested id
    #[error("no student record with id {0}")]
    NotFound(StudentId),
}

impl RosterError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::NotFound(_) => "ROSTER_NOT_FOUND",
        }
    }

    /// Roster errors never abort the session
    pub fn is_fatal(&self) -> bool {
        false
    }
}
