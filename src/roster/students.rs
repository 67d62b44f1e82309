use tracing::debug;

use crate::error::Result;
use crate::models::{Student, StudentId};

use super::Roster;

impl Roster {
    /// Append a student with no courses. Names are taken as given; trimming
    /// and blank checks belong to the caller (see `input::parse_name`).
    pub fn add_student(&mut self, name: impl Into<String>) -> StudentId {
        let id = StudentId(self.next_id);
        self.next_id += 1;
        let student = Student::new(id, name);
        debug!(%id, name = %student.name, "student added");
        self.students.push(student);
        id
    }

    /// Case-insensitive exact match, first hit in insertion order. A miss is
    /// an ordinary outcome and comes back as `None`.
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.name_matches(name))
    }

    pub fn find_student_id(&self, name: &str) -> Option<StudentId> {
        self.find_student(name).map(|student| student.id)
    }

    /// Replace the display name in place. Other students may already carry
    /// the same name.
    pub fn rename_student(&mut self, id: StudentId, new_name: impl Into<String>) -> Result<()> {
        let student = self.student_mut(id)?;
        let new_name = new_name.into();
        debug!(%id, from = %student.name, to = %new_name, "student renamed");
        student.name = new_name;
        Ok(())
    }

    /// Remove a student together with all of its courses and return it.
    pub fn delete_student(&mut self, id: StudentId) -> Result<Student> {
        let index = self.position(id)?;
        let removed = self.students.remove(index);
        debug!(%id, name = %removed.name, "student deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RosterError;
    use crate::roster::Roster;

    #[test]
    fn add_student_appends_in_order() {
        let mut roster = Roster::new();
        let ana = roster.add_student("Ana");
        let ben = roster.add_student("Ben");

        assert_eq!(roster.len(), 2);
        assert_ne!(ana, ben);
        let names: Vec<_> = roster.students().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Ben"]);
        assert!(roster.student(ana).unwrap().courses.is_empty());
    }

    #[test]
    fn find_student_ignores_case() {
        let mut roster = Roster::new();
        let ana = roster.add_student("Ana");

        assert_eq!(roster.find_student("ana").map(|s| s.id), Some(ana));
        assert_eq!(roster.find_student("ANA").map(|s| s.id), Some(ana));
        assert!(roster.find_student("Anastasia").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_match() {
        let mut roster = Roster::new();
        let first = roster.add_student("Sam");
        let second = roster.add_student("sam");

        assert_eq!(roster.find_student_id("SAM"), Some(first));
        roster.delete_student(first).unwrap();
        assert_eq!(roster.find_student_id("SAM"), Some(second));
    }

    #[test]
    fn rename_keeps_identity_and_courses() {
        let mut roster = Roster::new();
        let id = roster.add_student("Ben");
        roster.add_grade(id, "Math", 80).unwrap();

        roster.rename_student(id, "Benjamin").unwrap();

        assert!(roster.find_student("ben").is_none());
        let renamed = roster.find_student("benjamin").unwrap();
        assert_eq!(renamed.id, id);
        assert_eq!(renamed.course("Math").unwrap().grades, vec![80]);
    }

    #[test]
    fn delete_student_with_stale_handle_is_not_found() {
        let mut roster = Roster::new();
        let id = roster.add_student("Cleo");
        roster.add_student("Dev");

        let removed = roster.delete_student(id).unwrap();
        assert_eq!(removed.name, "Cleo");
        assert_eq!(roster.len(), 1);

        assert!(matches!(
            roster.delete_student(id),
            Err(RosterError::NotFound(_))
        ));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn handles_are_not_reused_after_deletion() {
        let mut roster = Roster::new();
        let old = roster.add_student("Eve");
        roster.delete_student(old).unwrap();
        let new = roster.add_student("Eve");

        assert_ne!(old, new);
        assert!(roster.student(old).is_err());
    }
}
