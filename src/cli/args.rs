//! CLI argument definitions using clap
//!
//! Invocation:
//! - rosterdb [--config <path>] [--empty]
//!
//! There are no subcommands; the only mode is the interactive session.

use clap::Parser;
use std::path::PathBuf;

/// rosterdb - a small, deterministic, in-memory student roster manager
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./rosterdb.json")]
    pub config: PathBuf,

    /// Start with an empty roster, ignoring the seed_samples setting
    #[arg(long)]
    pub empty: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rosterdb"]);
        assert_eq!(cli.config, PathBuf::from("./rosterdb.json"));
        assert!(!cli.empty);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::parse_from(["rosterdb", "--config", "/tmp/r.json", "--empty"]);
        assert_eq!(cli.config, PathBuf::from("/tmp/r.json"));
        assert!(cli.empty);
    }
}
