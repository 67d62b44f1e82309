use tracing::debug;

use crate::error::{Result, RosterError};
use crate::models::{Course, Student, StudentId};

use super::Roster;

/// Where a grade for a given course name will land.
enum CourseSlot {
    Graded(usize),
    Empty(usize),
    New,
}

impl CourseSlot {
    fn locate(student: &Student, course: &str) -> Self {
        match student.courses.iter().position(|c| c.name == course) {
            Some(index) if student.courses[index].grades.is_empty() => CourseSlot::Empty(index),
            Some(index) => CourseSlot::Graded(index),
            None => CourseSlot::New,
        }
    }
}

impl Roster {
    /// Append a grade to a course, creating the course on first use. There is
    /// no separate "create course" operation. The grade is not range checked
    /// here; callers validate with `input::parse_grade` first.
    pub fn add_grade(&mut self, id: StudentId, course: &str, grade: i32) -> Result<()> {
        let student = self.student_mut(id)?;
        let index = match CourseSlot::locate(student, course) {
            CourseSlot::Graded(index) | CourseSlot::Empty(index) => index,
            CourseSlot::New => {
                debug!(%id, course, "course created");
                student.courses.push(Course::new(course));
                student.courses.len() - 1
            }
        };
        student.courses[index].grades.push(grade);
        debug!(%id, course, grade, "grade added");
        Ok(())
    }

    /// Mean of a course's grades, recomputed on every call. Missing and
    /// empty courses both yield `0.0`.
    pub fn average(&self, id: StudentId, course: &str) -> Result<f64> {
        Ok(self.student(id)?.average(course))
    }

    /// Current grade list for a course. Index-based edits should be issued
    /// against a fresh snapshot since deletions shift positions.
    pub fn grades(&self, id: StudentId, course: &str) -> Result<&[i32]> {
        self.student(id)?
            .course(course)
            .map(|c| c.grades.as_slice())
            .ok_or_else(|| RosterError::course_not_found(course))
    }

    /// Drop a course and every grade under it.
    pub fn delete_course(&mut self, id: StudentId, course: &str) -> Result<Course> {
        let student = self.student_mut(id)?;
        let index = student
            .courses
            .iter()
            .position(|c| c.name == course)
            .ok_or_else(|| RosterError::course_not_found(course))?;
        let removed = student.courses.remove(index);
        debug!(%id, course, grades = removed.grades.len(), "course deleted");
        Ok(removed)
    }

    /// Overwrite the grade at `index` (0-based), returning the old value.
    pub fn edit_grade(
        &mut self,
        id: StudentId,
        course: &str,
        index: usize,
        new_grade: i32,
    ) -> Result<i32> {
        let grades = self.grades_mut(id, course)?;
        let len = grades.len();
        let slot = grades
            .get_mut(index)
            .ok_or_else(|| RosterError::index_out_of_range(index, len))?;
        let previous = std::mem::replace(slot, new_grade);
        debug!(%id, course, index, previous, new_grade, "grade edited");
        Ok(previous)
    }

    /// Remove the grade at `index` (0-based); later grades move down by one.
    /// Removing the last grade leaves the course in place with no grades.
    pub fn delete_grade(&mut self, id: StudentId, course: &str, index: usize) -> Result<i32> {
        let grades = self.grades_mut(id, course)?;
        if index >= grades.len() {
            return Err(RosterError::index_out_of_range(index, grades.len()));
        }
        let removed = grades.remove(index);
        debug!(%id, course, index, removed, "grade deleted");
        Ok(removed)
    }

    fn grades_mut(&mut self, id: StudentId, course: &str) -> Result<&mut Vec<i32>> {
        self.student_mut(id)?
            .course_mut(course)
            .map(|c| &mut c.grades)
            .ok_or_else(|| RosterError::course_not_found(course))
    }
}
