//! Matching predicates for roster search operations
//!
//! Search semantics are fixed and deliberately small:
//! - name search is case-insensitive substring containment
//! - course filtering is case-insensitive exact equality
//!
//! No pattern syntax, no trimming of either side, no normalization
//! beyond Unicode lowercasing of both sides.

/// Evaluates search predicates against record fields.
pub struct RosterFilter;

impl RosterFilter {
    /// True when `name` contains `needle`, ignoring case.
    ///
    /// An empty or all-whitespace needle matches every name; a blank
    /// search means "show me everything". Any other needle is matched
    /// literally, whitespace included.
    pub fn name_contains(name: &str, needle: &str) -> bool {
        if needle.trim().is_empty() {
            return true;
        }
        name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// True when `course` equals `wanted`, ignoring case.
    ///
    /// Exact equality, not containment: "Computer Science 2" is not a
    /// match for "computer science".
    pub fn course_equals(course: &str, wanted: &str) -> bool {
        course.to_lowercase() == wanted.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_ignores_case() {
        assert!(RosterFilter::name_contains("John Doe", "JOHN"));
        assert!(RosterFilter::name_contains("John Doe", "doe"));
        assert!(RosterFilter::name_contains("John Doe", "hn D"));
    }

    #[test]
    fn test_name_match_rejects_absent_substrings() {
        assert!(!RosterFilter::name_contains("John Doe", "Jane"));
        assert!(!RosterFilter::name_contains("John Doe", "John  Doe"));
    }

    #[test]
    fn test_blank_needle_matches_every_name() {
        assert!(RosterFilter::name_contains("John Doe", ""));
        assert!(RosterFilter::name_contains("John Doe", "   "));
        assert!(RosterFilter::name_contains("JaneSmith", " \t "));
    }

    #[test]
    fn test_needle_whitespace_is_significant() {
        // "John Doe" ends at "Doe", so " doe " is not a substring of it.
        assert!(!RosterFilter::name_contains("John Doe", " doe "));
        assert!(RosterFilter::name_contains("John van Doe Jr", " doe "));
    }

    #[test]
    fn test_course_match_ignores_case_only() {
        assert!(RosterFilter::course_equals("Computer Science", "computer science"));
        assert!(RosterFilter::course_equals("Computer Science", "COMPUTER SCIENCE"));
    }

    #[test]
    fn test_course_match_is_exact_not_substring() {
        assert!(!RosterFilter::course_equals("Computer Science 2", "computer science"));
        assert!(!RosterFilter::course_equals("Computer Science", "Computer"));
        assert!(!RosterFilter::course_equals("Computer Science", " computer science"));
    }
}
