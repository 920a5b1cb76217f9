//! The record store: owner of all student records and the id sequence
//!
//! One ordered collection, one counter. Every operation is a synchronous
//! linear scan in insertion order; nothing blocks, nothing retries, and
//! results are deterministic given the current state and inputs. At roster
//! scale a secondary index would buy nothing, so none is kept.

use super::errors::{RosterError, RosterResult};
use super::filters::RosterFilter;
use super::record::{StudentDraft, StudentId, StudentRecord};

/// In-memory store of student records.
///
/// Owns every live record exclusively; reads hand out borrows that cannot
/// outlive the store. Records sit in insertion order and every listing or
/// scan traverses that order. Ids come from a monotonically increasing
/// counter starting at 1 and are never reassigned, even after deletions.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    next_id: u32,
}

impl RecordStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a new student and return the assigned id.
    ///
    /// Ids are handed out strictly in sequence; a retired id is never
    /// assigned again. The call cannot fail: field values arrive already
    /// parsed and are stored verbatim.
    pub fn add(&mut self, draft: StudentDraft) -> StudentId {
        let id = StudentId::new(self.next_id);
        self.next_id += 1;
        self.records.push(StudentRecord::from_draft(id, draft));
        id
    }

    /// All live records in insertion order.
    ///
    /// An empty roster yields an empty slice, which is a normal state and
    /// never an error.
    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Look up a record by id.
    ///
    /// A miss is an expected outcome, reported as `None`; the store never
    /// treats business-level absence as a fault.
    pub fn find_by_id(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Overwrite every non-id field of the record with `id` and return a
    /// borrow of the updated record.
    ///
    /// On a miss nothing changes and [`RosterError::NotFound`] is returned.
    pub fn update(&mut self, id: StudentId, draft: StudentDraft) -> RosterResult<&StudentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RosterError::NotFound(id))?;
        record.apply(draft);
        Ok(record)
    }

    /// Remove the record with `id` and hand it back to the caller.
    ///
    /// Removal keeps the insertion order of the survivors, leaves no
    /// tombstone, and never frees the id for reuse.
    pub fn delete(&mut self, id: StudentId) -> RosterResult<StudentRecord> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RosterError::NotFound(id))?;
        Ok(self.records.remove(position))
    }

    /// Records whose name contains `needle`, ignoring case, in insertion
    /// order.
    ///
    /// An empty or all-whitespace needle matches every record; no matches
    /// yield an empty Vec, never an error.
    pub fn search_by_name(&self, needle: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|record| RosterFilter::name_contains(&record.name, needle))
            .collect()
    }

    /// Records enrolled in exactly `course`, ignoring case, in insertion
    /// order.
    ///
    /// Equality, not containment: "Computer Science 2" is not a match for
    /// "computer science".
    pub fn filter_by_course(&self, course: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|record| RosterFilter::course_equals(&record.course, course))
            .collect()
    }

    /// Arithmetic mean of all grades, or `None` when the roster is empty.
    ///
    /// The empty case is the defined "no data" outcome; it is never an
    /// error and never a NaN. Rounding for display is the driver's job;
    /// the store returns the exact mean.
    pub fn average_grade(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|record| record.grade).sum();
        Some(total / self.records.len() as f64)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
