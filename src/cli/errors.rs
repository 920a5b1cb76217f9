//! CLI-specific error types
//!
//! A `CliError` is always fatal: it means the session itself cannot
//! continue (unreadable config, broken stdin/stdout). Mistyped menu
//! choices and unparseable numbers are handled inside the loop and
//! never surface here.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTER_CLI_CONFIG_ERROR",
            Self::IoError => "ROSTER_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(CliErrorCode::ConfigError.code(), "ROSTER_CLI_CONFIG_ERROR");
        assert_eq!(CliErrorCode::IoError.code(), "ROSTER_CLI_IO_ERROR");
    }

    #[test]
    fn test_display_prefixes_the_code() {
        let err = CliError::config_error("grade_precision must be <= 6");
        assert_eq!(
            err.to_string(),
            "ROSTER_CLI_CONFIG_ERROR: grade_precision must be <= 6"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CliError::from(io_err);
        assert_eq!(err.code(), &CliErrorCode::IoError);
        assert!(err.message().contains("pipe closed"));
    }
}
