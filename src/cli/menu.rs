//! Interactive menu session
//!
//! Nine actions over one in-memory roster. The session owns the store,
//! reads choices and field values line by line, and prints every
//! user-facing message itself; store operations return data only.
//! Generic reader/writer handles keep scripted sessions testable.

use std::io::{BufRead, Write};

use crate::observability::{Logger, MetricsRegistry};
use crate::roster::{
    sample_students, RecordStore, RosterError, StudentDraft, StudentId, StudentRecord,
};

use super::commands::Config;
use super::errors::CliResult;
use super::io::prompt;

/// One of the nine menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddStudent,
    ViewAllStudents,
    ViewStudentById,
    UpdateStudent,
    DeleteStudent,
    SearchByName,
    FilterByCourse,
    AverageGrade,
    Exit,
}

impl MenuAction {
    /// Parse a menu choice. Anything but an exact "1".."9" is rejected.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::ViewAllStudents),
            "3" => Some(Self::ViewStudentById),
            "4" => Some(Self::UpdateStudent),
            "5" => Some(Self::DeleteStudent),
            "6" => Some(Self::SearchByName),
            "7" => Some(Self::FilterByCourse),
            "8" => Some(Self::AverageGrade),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Stable action name for log events
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddStudent => "add_student",
            Self::ViewAllStudents => "view_all_students",
            Self::ViewStudentById => "view_student_by_id",
            Self::UpdateStudent => "update_student",
            Self::DeleteStudent => "delete_student",
            Self::SearchByName => "search_by_name",
            Self::FilterByCourse => "filter_by_course",
            Self::AverageGrade => "average_grade",
            Self::Exit => "exit",
        }
    }
}

/// Whether the loop continues after an action
enum Flow {
    Continue,
    Exit,
}

/// Outcome of prompting for an id
enum IdPrompt {
    /// A well-formed id
    Parsed(StudentId),
    /// Malformed input; the rejection message is already printed
    Rejected,
    /// The reader is exhausted
    EndOfInput,
}

/// One interactive session over one roster.
pub struct Session {
    store: RecordStore,
    config: Config,
    metrics: MetricsRegistry,
}

impl Session {
    /// Create a session, seeding the sample students when configured.
    pub fn new(config: Config) -> Self {
        let mut store = RecordStore::new();
        if config.seed_samples {
            for draft in sample_students() {
                store.add(draft);
            }
        }
        Self {
            store,
            config,
            metrics: MetricsRegistry::new(),
        }
    }

    /// The underlying record store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Session counters
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Drive the menu loop until the exit action or end of input.
    ///
    /// Every pass renders the menu, reads one choice, dispatches, and
    /// separates actions with a blank line. End of input ends the
    /// session exactly like the exit action.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> CliResult<()> {
        let seeded = self.store.len().to_string();
        Logger::info("SESSION_START", &[("records", seeded.as_str())]);

        loop {
            render_menu(writer)?;
            let Some(choice) = prompt(reader, writer, "Enter your choice (1-9): ")? else {
                break;
            };

            let flow = match MenuAction::parse(&choice) {
                Some(action) => {
                    Logger::trace("ACTION_DISPATCHED", &[("action", action.name())]);
                    self.dispatch(action, reader, writer)?
                }
                None => {
                    self.reject_input(&choice, "menu_choice");
                    writeln!(writer, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Continue => writeln!(writer)?,
                Flow::Exit => break,
            }
        }

        writeln!(writer, "Thank you for using Student Management System!")?;

        let snapshot = self.metrics.snapshot();
        let records = self.store.len().to_string();
        let added = snapshot.records_added.to_string();
        let deleted = snapshot.records_deleted.to_string();
        let rejected = snapshot.inputs_rejected.to_string();
        Logger::info(
            "SESSION_END",
            &[
                ("records", records.as_str()),
                ("records_added", added.as_str()),
                ("records_deleted", deleted.as_str()),
                ("inputs_rejected", rejected.as_str()),
            ],
        );
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        action: MenuAction,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        match action {
            MenuAction::AddStudent => self.handle_add(reader, writer),
            MenuAction::ViewAllStudents => self.handle_view_all(writer),
            MenuAction::ViewStudentById => self.handle_view_by_id(reader, writer),
            MenuAction::UpdateStudent => self.handle_update(reader, writer),
            MenuAction::DeleteStudent => self.handle_delete(reader, writer),
            MenuAction::SearchByName => self.handle_search(reader, writer),
            MenuAction::FilterByCourse => self.handle_filter(reader, writer),
            MenuAction::AverageGrade => self.handle_average(writer),
            MenuAction::Exit => Ok(Flow::Exit),
        }
    }

    /// Action 1. A field that fails to parse aborts the whole action;
    /// no partial record is ever stored.
    fn handle_add<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let Some(name) = prompt(reader, writer, "Enter student name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age_text) = prompt(reader, writer, "Enter student age: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = age_text.trim().parse::<i32>() else {
            self.reject_input(&age_text, "age");
            writeln!(writer, "Invalid age entered.")?;
            return Ok(Flow::Continue);
        };
        let Some(email) = prompt(reader, writer, "Enter student email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(course) = prompt(reader, writer, "Enter student course: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(grade_text) = prompt(reader, writer, "Enter student grade: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(grade) = grade_text.trim().parse::<f64>() else {
            self.reject_input(&grade_text, "grade");
            writeln!(writer, "Invalid grade entered.")?;
            return Ok(Flow::Continue);
        };

        let id = self
            .store
            .add(StudentDraft::new(name.clone(), age, email, course, grade));
        self.metrics.increment_records_added();
        writeln!(writer, "Student '{}' added successfully with ID: {}", name, id)?;
        Ok(Flow::Continue)
    }

    /// Action 2
    fn handle_view_all<W: Write>(&mut self, writer: &mut W) -> CliResult<Flow> {
        self.metrics.increment_listings();
        let records = self.store.list_all();
        if records.is_empty() {
            writeln!(writer, "No students found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(writer)?;
        writeln!(writer, "=== All Students ===")?;
        for record in records {
            writeln!(writer, "{}", self.format_student(record))?;
        }
        Ok(Flow::Continue)
    }

    /// Action 3
    fn handle_view_by_id<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let id = match self.prompt_id(reader, writer, "Enter student ID: ")? {
            IdPrompt::Parsed(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::EndOfInput => return Ok(Flow::Exit),
        };
        self.metrics.increment_id_lookups();
        match self.store.find_by_id(id) {
            Some(record) => {
                let line = self.format_student(record);
                writeln!(writer)?;
                writeln!(writer, "=== Student Details ===")?;
                writeln!(writer, "{}", line)?;
            }
            None => writeln!(writer, "Student with ID {} not found.", id)?,
        }
        Ok(Flow::Continue)
    }

    /// Action 4. The id is checked before any field prompt, so a miss
    /// never asks for replacement values.
    fn handle_update<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let id = match self.prompt_id(reader, writer, "Enter student ID to update: ")? {
            IdPrompt::Parsed(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::EndOfInput => return Ok(Flow::Exit),
        };

        let current = match self.store.find_by_id(id) {
            Some(record) => self.format_student(record),
            None => {
                writeln!(writer, "Student with ID {} not found.", id)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(writer, "Current details: {}", current)?;
        writeln!(writer, "Enter new details:")?;

        let Some(name) = prompt(reader, writer, "Enter new name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age_text) = prompt(reader, writer, "Enter new age: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = age_text.trim().parse::<i32>() else {
            self.reject_input(&age_text, "age");
            writeln!(writer, "Invalid age entered.")?;
            return Ok(Flow::Continue);
        };
        let Some(email) = prompt(reader, writer, "Enter new email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(course) = prompt(reader, writer, "Enter new course: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(grade_text) = prompt(reader, writer, "Enter new grade: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(grade) = grade_text.trim().parse::<f64>() else {
            self.reject_input(&grade_text, "grade");
            writeln!(writer, "Invalid grade entered.")?;
            return Ok(Flow::Continue);
        };

        let draft = StudentDraft::new(name, age, email, course, grade);
        match self.store.update(id, draft) {
            Ok(_) => {
                self.metrics.increment_records_updated();
                writeln!(writer, "Student with ID {} updated successfully.", id)?;
            }
            Err(RosterError::NotFound(_)) => {
                writeln!(writer, "Student with ID {} not found.", id)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Action 5
    fn handle_delete<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let id = match self.prompt_id(reader, writer, "Enter student ID to delete: ")? {
            IdPrompt::Parsed(id) => id,
            IdPrompt::Rejected => return Ok(Flow::Continue),
            IdPrompt::EndOfInput => return Ok(Flow::Exit),
        };
        match self.store.delete(id) {
            Ok(removed) => {
                self.metrics.increment_records_deleted();
                writeln!(
                    writer,
                    "Student '{}' with ID {} deleted successfully.",
                    removed.name, id
                )?;
            }
            Err(RosterError::NotFound(_)) => {
                writeln!(writer, "Student with ID {} not found.", id)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Action 6. A blank needle matches every record.
    fn handle_search<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let Some(needle) = prompt(reader, writer, "Enter name to search: ")? else {
            return Ok(Flow::Exit);
        };
        self.metrics.increment_name_searches();
        let matches = self.store.search_by_name(&needle);
        if matches.is_empty() {
            writeln!(writer, "No students found with name containing '{}'.", needle)?;
            return Ok(Flow::Continue);
        }

        writeln!(writer)?;
        writeln!(writer, "=== Students with name containing '{}' ===", needle)?;
        for record in matches {
            writeln!(writer, "{}", self.format_student(record))?;
        }
        Ok(Flow::Continue)
    }

    /// Action 7
    fn handle_filter<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> CliResult<Flow> {
        let Some(course) = prompt(reader, writer, "Enter course name: ")? else {
            return Ok(Flow::Exit);
        };
        self.metrics.increment_course_filters();
        let matches = self.store.filter_by_course(&course);
        if matches.is_empty() {
            writeln!(writer, "No students found in course '{}'.", course)?;
            return Ok(Flow::Continue);
        }

        writeln!(writer)?;
        writeln!(writer, "=== Students in {} ===", course)?;
        for record in matches {
            writeln!(writer, "{}", self.format_student(record))?;
        }
        Ok(Flow::Continue)
    }

    /// Action 8
    fn handle_average<W: Write>(&mut self, writer: &mut W) -> CliResult<Flow> {
        match self.store.average_grade() {
            Some(average) => {
                self.metrics.increment_averages_computed();
                writeln!(
                    writer,
                    "Average grade of all students: {:.prec$}",
                    average,
                    prec = self.config.grade_precision,
                )?;
            }
            None => writeln!(writer, "No students to calculate average grade.")?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt for an id and parse it. A malformed id prints its
    /// rejection message here; the caller decides what each outcome
    /// does to the loop.
    fn prompt_id<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        text: &str,
    ) -> CliResult<IdPrompt> {
        let Some(id_text) = prompt(reader, writer, text)? else {
            return Ok(IdPrompt::EndOfInput);
        };
        match id_text.trim().parse::<u32>() {
            Ok(raw) => Ok(IdPrompt::Parsed(StudentId::new(raw))),
            Err(_) => {
                self.reject_input(&id_text, "id");
                writeln!(writer, "Invalid ID entered.")?;
                Ok(IdPrompt::Rejected)
            }
        }
    }

    /// Count and log a console input that failed to parse.
    fn reject_input(&self, input: &str, kind: &str) {
        self.metrics.increment_inputs_rejected();
        Logger::warn("INPUT_REJECTED", &[("input", input), ("kind", kind)]);
    }

    /// Render one record the way every listing prints it.
    fn format_student(&self, record: &StudentRecord) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Email: {}, Course: {}, Grade: {:.prec$}",
            record.id,
            record.name,
            record.age,
            record.email,
            record.course,
            record.grade,
            prec = self.config.grade_precision,
        )
    }
}

/// Write the menu header and the nine numbered actions.
fn render_menu<W: Write>(writer: &mut W) -> CliResult<()> {
    writeln!(writer, "=== Student Management System ===")?;
    writeln!(writer, "1. Add New Student")?;
    writeln!(writer, "2. View All Students")?;
    writeln!(writer, "3. View Student by ID")?;
    writeln!(writer, "4. Update Student")?;
    writeln!(writer, "5. Delete Student")?;
    writeln!(writer, "6. Search Students by Name")?;
    writeln!(writer, "7. Filter Students by Course")?;
    writeln!(writer, "8. Calculate Average Grade")?;
    writeln!(writer, "9. Exit")?;
    Ok(())
}
