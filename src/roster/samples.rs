//! Bundled sample students
//!
//! Unless configured otherwise, an interactive session starts from a small
//! known roster so every menu action has something to show.

use super::record::StudentDraft;

/// Drafts for the bundled sample students, in seeding order.
pub fn sample_students() -> Vec<StudentDraft> {
    vec![
        StudentDraft::new("John Doe", 20, "john.doe@email.com", "Computer Science", 85.5),
        StudentDraft::new("Jane Smith", 19, "jane.smith@email.com", "Mathematics", 92.0),
        StudentDraft::new("Bob Johnson", 21, "bob.johnson@email.com", "Physics", 78.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_three_distinct_students() {
        let samples = sample_students();
        assert_eq!(samples.len(), 3);

        let names: Vec<&str> = samples.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Jane Smith", "Bob Johnson"]);
    }
}
