//! The in-memory roster, split across logical submodules: student records,
//! grade bookkeeping, and the derived listing/report.

mod grades;
mod report;
mod students;

use crate::error::{Result, RosterError};
use crate::models::{Student, StudentId};

/// Ordered collection of every tracked student. Insertion order is display
/// order and the tie-break for case-insensitive name lookups.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    students: Vec<Student>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// All students in display order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Resolve a handle to its student.
    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students
            .iter()
            .find(|student| student.id == id)
            .ok_or_else(RosterError::student_not_found)
    }

    fn student_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|student| student.id == id)
            .ok_or_else(RosterError::student_not_found)
    }

    fn position(&self, id: StudentId) -> Result<usize> {
        self.students
            .iter()
            .position(|student| student.id == id)
            .ok_or_else(RosterError::student_not_found)
    }
}
