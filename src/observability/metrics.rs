//! Session metrics
//!
//! Counters only: no gauges, no histograms. Values increase monotonically
//! and reset only on process start. Counters are atomic so the registry
//! can be shared freely, even though a roster session has exactly one
//! caller.

use std::sync::atomic::{AtomicU64, Ordering};

/// Registry of all session counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Records created via add
    records_added: AtomicU64,
    /// Records rewritten via update
    records_updated: AtomicU64,
    /// Records removed via delete
    records_deleted: AtomicU64,
    /// Full-roster listings served
    listings: AtomicU64,
    /// Lookups by id
    id_lookups: AtomicU64,
    /// Name searches run
    name_searches: AtomicU64,
    /// Course filters run
    course_filters: AtomicU64,
    /// Averages actually computed (an empty roster yields no value)
    averages_computed: AtomicU64,
    /// Console inputs rejected (bad menu choice or unparseable number)
    inputs_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a created record
    pub fn increment_records_added(&self) {
        self.records_added.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a rewritten record
    pub fn increment_records_updated(&self) {
        self.records_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a removed record
    pub fn increment_records_deleted(&self) {
        self.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a full-roster listing
    pub fn increment_listings(&self) {
        self.listings.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a lookup by id
    pub fn increment_id_lookups(&self) {
        self.id_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a name search
    pub fn increment_name_searches(&self) {
        self.name_searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a course filter
    pub fn increment_course_filters(&self) {
        self.course_filters.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a computed average
    pub fn increment_averages_computed(&self) {
        self.averages_computed.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a rejected console input
    pub fn increment_inputs_rejected(&self) {
        self.inputs_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_added: self.records_added.load(Ordering::Relaxed),
            records_updated: self.records_updated.load(Ordering::Relaxed),
            records_deleted: self.records_deleted.load(Ordering::Relaxed),
            listings: self.listings.load(Ordering::Relaxed),
            id_lookups: self.id_lookups.load(Ordering::Relaxed),
            name_searches: self.name_searches.load(Ordering::Relaxed),
            course_filters: self.course_filters.load(Ordering::Relaxed),
            averages_computed: self.averages_computed.load(Ordering::Relaxed),
            inputs_rejected: self.inputs_rejected.load(Ordering::Relaxed),
        }
    }

    /// All counters as one JSON object with fixed key order.
    pub fn to_json(&self) -> String {
        let s = self.snapshot();
        format!(
            r#"{{"records_added":{},"records_updated":{},"records_deleted":{},"listings":{},"id_lookups":{},"name_searches":{},"course_filters":{},"averages_computed":{},"inputs_rejected":{}}}"#,
            s.records_added,
            s.records_updated,
            s.records_deleted,
            s.listings,
            s.id_lookups,
            s.name_searches,
            s.course_filters,
            s.averages_computed,
            s.inputs_rejected,
        )
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records_added: u64,
    pub records_updated: u64,
    pub records_deleted: u64,
    pub listings: u64,
    pub id_lookups: u64,
    pub name_searches: u64,
    pub course_filters: u64,
    pub averages_computed: u64,
    pub inputs_rejected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_all_zero() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.records_added, 0);
        assert_eq!(snapshot.inputs_rejected, 0);
    }

    #[test]
    fn test_each_counter_increments_independently() {
        let registry = MetricsRegistry::new();

        registry.increment_records_added();
        registry.increment_records_added();
        registry.increment_records_updated();
        registry.increment_records_deleted();
        registry.increment_listings();
        registry.increment_id_lookups();
        registry.increment_name_searches();
        registry.increment_course_filters();
        registry.increment_averages_computed();
        registry.increment_inputs_rejected();

        let s = registry.snapshot();
        assert_eq!(s.records_added, 2);
        assert_eq!(s.records_updated, 1);
        assert_eq!(s.records_deleted, 1);
        assert_eq!(s.listings, 1);
        assert_eq!(s.id_lookups, 1);
        assert_eq!(s.name_searches, 1);
        assert_eq!(s.course_filters, 1);
        assert_eq!(s.averages_computed, 1);
        assert_eq!(s.inputs_rejected, 1);
    }

    #[test]
    fn test_to_json_is_valid_and_exact() {
        let registry = MetricsRegistry::new();
        registry.increment_records_added();
        registry.increment_name_searches();

        let parsed: serde_json::Value = serde_json::from_str(&registry.to_json()).unwrap();
        assert_eq!(parsed["records_added"], 1);
        assert_eq!(parsed["name_searches"], 1);
        assert_eq!(parsed["records_deleted"], 0);
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    registry.increment_id_lookups();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().id_lookups, 400);
    }
}
