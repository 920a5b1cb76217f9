//! Session observability
//!
//! The interactive transcript owns stdout, so every log line goes to
//! stderr as one-line JSON with keys in deterministic order. Metrics are
//! plain counters that reset on process start. Nothing in this module may
//! fail the session: a log write that cannot complete is dropped.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
