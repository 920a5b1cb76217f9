//! Session configuration and entry points
//!
//! `run()` is the whole program: parse arguments, load configuration,
//! build the session, hand it stdin and stdout. A missing config file
//! is not an error; an unreadable or invalid one is fatal.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::menu::Session;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preload the three sample students (optional, default true)
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,

    /// Decimal places for grades and averages (optional, default 2)
    #[serde(default = "default_grade_precision")]
    pub grade_precision: usize,
}

fn default_seed_samples() -> bool {
    true
}
fn default_grade_precision() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_samples: default_seed_samples(),
            grade_precision: default_grade_precision(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults, so the tool starts without
    /// ceremony. A file that exists but cannot be read or parsed is a
    /// config error.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.grade_precision > 6 {
            return Err(CliError::config_error(format!(
                "grade_precision must be <= 6, got {}",
                self.grade_precision
            )));
        }
        Ok(())
    }
}

/// Parse arguments and run the interactive session
pub fn run() -> CliResult<()> {
    run_with_args(Cli::parse_args())
}

/// Resolve the effective configuration for parsed arguments.
///
/// Loads the file named by `--config`, then applies the flag
/// overrides: `--empty` forces an unseeded roster no matter what the
/// file says.
fn load_effective_config(args: &Cli) -> CliResult<Config> {
    let mut config = Config::load(&args.config)?;
    if args.empty {
        config.seed_samples = false;
    }
    Ok(config)
}

/// Run the interactive session for already-parsed arguments
pub fn run_with_args(args: Cli) -> CliResult<()> {
    let config = load_effective_config(&args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    let mut session = Session::new(config);
    session.run(&mut reader, &mut writer)
}
