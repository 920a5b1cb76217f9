//! rosterdb - a small, deterministic, in-memory student roster manager
//!
//! One record store, one console session, no persistence.

pub mod cli;
pub mod observability;
pub mod roster;
