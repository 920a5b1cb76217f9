//! Student record types
//!
//! A roster record is a flat, fully-owned value: the store owns every live
//! record exclusively and hands out borrows for reads. Identity is the
//! store-assigned [`StudentId`]; every other field is caller data and is
//! stored verbatim (no normalization, no format validation).

use std::fmt;

/// Store-assigned record identifier.
///
/// Ids are positive, unique across all live records, immutable after
/// creation, and never handed out twice, even after the record they named
/// has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    /// Wrap a raw id value.
    ///
    /// Ids assigned by the store start at 1; a caller-constructed id (for
    /// example, parsed from console input) may name no live record, which
    /// lookups report as a normal miss.
    pub fn new(raw: u32) -> Self {
        StudentId(raw)
    }

    /// The raw integer value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One student's stored attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Store-assigned identity, immutable for the record's lifetime.
    pub id: StudentId,
    /// Display name. Assumed non-empty; the store does not enforce it.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Contact email. Stored verbatim, no format validation.
    pub email: String,
    /// Enrolled course name.
    pub course: String,
    /// Current grade.
    pub grade: f64,
}

impl StudentRecord {
    /// Build a record from a store-assigned id and a draft.
    pub(crate) fn from_draft(id: StudentId, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            age: draft.age,
            email: draft.email,
            course: draft.course,
            grade: draft.grade,
        }
    }

    /// Overwrite every non-id field from a draft. The id never changes.
    pub(crate) fn apply(&mut self, draft: StudentDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.email = draft.email;
        self.course = draft.course;
        self.grade = draft.grade;
    }
}

/// The non-id field bundle accepted by `add` and `update`.
///
/// Callers hand over already-parsed, typed values; the store never parses
/// text and never rejects a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Contact email.
    pub email: String,
    /// Enrolled course name.
    pub course: String,
    /// Current grade.
    pub grade: f64,
}

impl StudentDraft {
    /// Create a draft.
    pub fn new(
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
        course: impl Into<String>,
        grade: f64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            course: course.into(),
            grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> StudentDraft {
        StudentDraft::new("Alice Brown", 22, "alice.brown@email.com", "Biology", 88.25)
    }

    #[test]
    fn test_from_draft_copies_all_fields() {
        let record = StudentRecord::from_draft(StudentId::new(7), sample_draft());

        assert_eq!(record.id, StudentId::new(7));
        assert_eq!(record.name, "Alice Brown");
        assert_eq!(record.age, 22);
        assert_eq!(record.email, "alice.brown@email.com");
        assert_eq!(record.course, "Biology");
        assert_eq!(record.grade, 88.25);
    }

    #[test]
    fn test_apply_overwrites_everything_but_id() {
        let mut record = StudentRecord::from_draft(StudentId::new(3), sample_draft());

        record.apply(StudentDraft::new(
            "Alice Green",
            23,
            "alice.green@email.com",
            "Chemistry",
            91.0,
        ));

        assert_eq!(record.id, StudentId::new(3));
        assert_eq!(record.name, "Alice Green");
        assert_eq!(record.age, 23);
        assert_eq!(record.email, "alice.green@email.com");
        assert_eq!(record.course, "Chemistry");
        assert_eq!(record.grade, 91.0);
    }

    #[test]
    fn test_id_display_is_the_raw_value() {
        assert_eq!(StudentId::new(42).to_string(), "42");
        assert_eq!(StudentId::new(42).value(), 42);
    }

    #[test]
    fn test_draft_accepts_borrowed_and_owned_text() {
        let owned = String::from("Dana White");
        let draft = StudentDraft::new(owned, 30, "dana@email.com", "History", 70.0);
        assert_eq!(draft.name, "Dana White");
    }
}
