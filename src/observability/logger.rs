//! Structured logger for the roster session
//!
//! - one log line = one event, as a single JSON object
//! - deterministic key ordering (event, severity, then fields sorted)
//! - synchronous, unbuffered writes
//! - every severity goes to stderr: stdout is the interactive surface
//!   and must carry nothing but the menu conversation
//! - logging failures are swallowed; observability must never take the
//!   session down

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-action detail
    Trace = 0,
    /// Session lifecycle
    Info = 1,
    /// Recoverable trouble (rejected input)
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured JSON event logger.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    ///
    /// Fields appear in deterministic order: alphabetical by key, after
    /// the fixed `event` and `severity` entries.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Render one event into `writer` as a single JSON line.
    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        // JSON is assembled by hand so key order stays deterministic.
        let mut line = String::with_capacity(128);
        line.push('{');
        push_entry(&mut line, "event", event);
        line.push(',');
        push_entry(&mut line, "severity", severity.as_str());
        for (key, value) in sorted {
            line.push(',');
            push_entry(&mut line, key, value);
        }
        line.push('}');
        line.push('\n');

        // One write, one flush; errors are ignored on purpose.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Log at TRACE level
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Append `"key":"value"` with both sides JSON-escaped.
fn push_entry(line: &mut String, key: &str, value: &str) {
    line.push('"');
    push_escaped(line, key);
    line.push_str("\":\"");
    push_escaped(line, value);
    line.push('"');
}

/// Append `text` with JSON string escaping.
fn push_escaped(line: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                line.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => line.push(c),
        }
    }
}

/// Render an event to a string, for tests.
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_log_line_is_valid_json() {
        let line = capture_log(Severity::Info, "SESSION_START", &[("records", "3")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "SESSION_START");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["records"], "3");
    }

    #[test]
    fn test_field_order_is_deterministic() {
        let a = capture_log(Severity::Trace, "E", &[("zeta", "1"), ("alpha", "2")]);
        let b = capture_log(Severity::Trace, "E", &[("alpha", "2"), ("zeta", "1")]);
        assert_eq!(a, b);
        assert!(a.find("alpha").unwrap() < a.find("zeta").unwrap());
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = capture_log(Severity::Warn, "INPUT_REJECTED", &[("a", "x")]);
        let event_pos = line.find("\"event\"").unwrap();
        let severity_pos = line.find("\"severity\"").unwrap();
        let field_pos = line.find("\"a\"").unwrap();
        assert!(event_pos < severity_pos);
        assert!(severity_pos < field_pos);
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let line = capture_log(Severity::Info, "E", &[("input", "he said \"hi\"\nbye")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["input"], "he said \"hi\"\nbye");
    }

    #[test]
    fn test_exactly_one_line_per_event() {
        let line = capture_log(Severity::Info, "E", &[("a", "1"), ("b", "2")]);
        assert_eq!(line.chars().filter(|c| *c == '\n').count(), 1);
        assert!(line.ends_with('\n'));
    }
}
