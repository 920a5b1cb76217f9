//! In-memory student roster: the record store and its types
//!
//! This module is the data-management core of the program: it owns the
//! records, assigns ids, and implements every CRUD/search/aggregate
//! operation. It performs no I/O and produces no user-facing text;
//! presentation belongs to the console driver in [`crate::cli`].

mod errors;
mod filters;
mod record;
mod samples;
mod store;

pub use errors::{RosterError, RosterResult};
pub use filters::RosterFilter;
pub use record::{StudentDraft, StudentId, StudentRecord};
pub use samples::sample_students;
pub use store::RecordStore;
