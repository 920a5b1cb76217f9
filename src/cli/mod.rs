//! Console interface for the roster
//!
//! Provides:
//! - argument parsing (`--config`, `--empty`)
//! - configuration loading with defaults
//! - the interactive nine-action menu session
//! - line I/O helpers shared by the session and its tests

mod args;
mod commands;
mod errors;
mod io;
mod menu;

pub use args::Cli;
pub use commands::{run, run_with_args, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use menu::{MenuAction, Session};
