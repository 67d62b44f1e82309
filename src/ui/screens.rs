use std::cmp::min;

use crate::models::{Course, Student, StudentId};

/// Which half of the student screen receives navigation keys.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Pane {
    Courses,
    Grades,
}

/// Drill-down view for one student: courses on the left, the selected
/// course's grades on the right. Only positions are stored; the student is
/// re-read from the roster on every frame so edits show up immediately.
pub(crate) struct StudentScreen {
    pub(crate) id: StudentId,
    pub(crate) course_selected: usize,
    pub(crate) grade_selected: usize,
    pub(crate) focus: Pane,
}

impl StudentScreen {
    pub(crate) fn new(id: StudentId) -> Self {
        Self {
            id,
            course_selected: 0,
            grade_selected: 0,
            focus: Pane::Courses,
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Courses => Pane::Grades,
            Pane::Grades => Pane::Courses,
        };
    }

    pub(crate) fn current_course<'a>(&self, student: &'a Student) -> Option<&'a Course> {
        student.courses.get(self.course_selected)
    }

    pub(crate) fn current_grade(&self, student: &Student) -> Option<(usize, i32)> {
        let course = self.current_course(student)?;
        course
            .grades
            .get(self.grade_selected)
            .map(|&grade| (self.grade_selected, grade))
    }

    /// Move the cursor of the focused pane, clamping at both ends.
    pub(crate) fn move_selection(&mut self, offset: isize, student: &Student) {
        match self.focus {
            Pane::Courses => {
                let len = student.courses.len();
                let previous = self.course_selected;
                self.course_selected = step(self.course_selected, offset, len);
                if previous != self.course_selected {
                    self.grade_selected = 0;
                }
            }
            Pane::Grades => {
                let len = self.current_course(student).map_or(0, |c| c.grades.len());
                self.grade_selected = step(self.grade_selected, offset, len);
            }
        }
    }

    pub(crate) fn select_first(&mut self, student: &Student) {
        self.move_selection(isize::MIN, student);
    }

    pub(crate) fn select_last(&mut self, student: &Student) {
        self.move_selection(isize::MAX, student);
    }

    /// Focus a course by name, used after adding a grade to it.
    pub(crate) fn focus_course(&mut self, student: &Student, course: &str) {
        if let Some(idx) = student.courses.iter().position(|c| c.name == course) {
            self.course_selected = idx;
        }
        self.ensure_in_bounds(student);
    }

    /// Clamp both cursors after the underlying lists shrank.
    pub(crate) fn ensure_in_bounds(&mut self, student: &Student) {
        let courses = student.courses.len();
        self.course_selected = min(self.course_selected, courses.saturating_sub(1));
        let grades = self.current_course(student).map_or(0, |c| c.grades.len());
        self.grade_selected = min(self.grade_selected, grades.saturating_sub(1));
        if courses == 0 {
            self.focus = Pane::Courses;
        }
    }
}

/// Apply a signed offset to `current` inside `0..len`.
pub(crate) fn step(current: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = (len - 1) as isize;
    (current as isize).saturating_add(offset).clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    fn sample() -> (Roster, StudentId) {
        let mut roster = Roster::new();
        let id = roster.add_student("Ana");
        roster.add_grade(id, "Math", 60).unwrap();
        roster.add_grade(id, "Math", 70).unwrap();
        roster.add_grade(id, "Art", 90).unwrap();
        (roster, id)
    }

    #[test]
    fn step_clamps_at_edges() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(1, 5, 3), 2);
        assert_eq!(step(2, isize::MIN, 3), 0);
        assert_eq!(step(0, 1, 0), 0);
    }

    #[test]
    fn changing_course_resets_grade_cursor() {
        let (roster, id) = sample();
        let student = roster.student(id).unwrap();
        let mut screen = StudentScreen::new(id);

        screen.toggle_focus();
        screen.move_selection(1, student);
        assert_eq!(screen.current_grade(student), Some((1, 70)));

        screen.toggle_focus();
        screen.move_selection(1, student);
        assert_eq!(screen.current_course(student).unwrap().name, "Art");
        assert_eq!(screen.grade_selected, 0);
    }

    #[test]
    fn cursors_follow_deletions() {
        let (mut roster, id) = sample();
        let mut screen = StudentScreen::new(id);
        screen.select_last(roster.student(id).unwrap());
        assert_eq!(screen.course_selected, 1);

        roster.delete_course(id, "Art").unwrap();
        screen.ensure_in_bounds(roster.student(id).unwrap());

        assert_eq!(screen.course_selected, 0);
    }
}
