use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::input::{parse_course, parse_grade, parse_name};
use crate::models::{Student, StudentId};

/// Single-line text dialog used for adding, renaming, and finding students.
#[derive(Default, Clone)]
pub(crate) struct NameForm {
    pub(crate) name: String,
    pub(crate) error: Option<String>,
}

impl NameForm {
    /// Seed the form with the current name when renaming.
    pub(crate) fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.name.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.name.pop();
    }

    /// Trimmed, non-empty name ready for the roster.
    pub(crate) fn parse_inputs(&self) -> Result<String> {
        Ok(parse_name(&self.name)?)
    }

    pub(crate) fn build_line(&self, field_name: &str) -> Line<'static> {
        let (display, style) = if self.name.is_empty() {
            (
                "<required>".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.name.clone(), Style::default().fg(Color::Yellow))
        };
        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// Fields available within the grade form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum GradeField {
    #[default]
    Course,
    Grade,
}

/// Form state for adding or editing a grade, including course-name
/// autocomplete from the catalog.
#[derive(Default, Clone)]
pub(crate) struct GradeForm {
    pub(crate) course: String,
    pub(crate) grade: String,
    pub(crate) active: GradeField,
    pub(crate) error: Option<String>,
    pub(crate) suggestion: Option<String>,
    pub(crate) autocomplete_disabled: bool,
    /// Editing an existing grade pins the course.
    pub(crate) course_locked: bool,
}

impl GradeForm {
    /// New grade, optionally pre-filled with the course under the cursor.
    pub(crate) fn for_course(course: Option<&str>) -> Self {
        let mut form = Self::default();
        if let Some(course) = course {
            form.course = course.to_string();
            form.active = GradeField::Grade;
            form.autocomplete_disabled = true;
        }
        form
    }

    /// Edit an existing grade in place; only the value can change.
    pub(crate) fn for_edit(course: &str, grade: i32) -> Self {
        Self {
            course: course.to_string(),
            grade: grade.to_string(),
            active: GradeField::Grade,
            course_locked: true,
            autocomplete_disabled: true,
            ..Self::default()
        }
    }

    pub(crate) fn toggle_field(&mut self) {
        if self.course_locked {
            return;
        }
        self.active = match self.active {
            GradeField::Course => GradeField::Grade,
            GradeField::Grade => GradeField::Course,
        };
        if self.active != GradeField::Course {
            self.suggestion = None;
        }
    }

    /// Append a character to the active field. The grade field only takes
    /// digits and a leading minus so range errors still reach validation.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            GradeField::Course => {
                if ch.is_control() {
                    return false;
                }
                self.autocomplete_disabled = false;
                self.course.push(ch);
                true
            }
            GradeField::Grade => {
                if ch.is_ascii_digit() || (ch == '-' && self.grade.is_empty()) {
                    self.grade.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            GradeField::Course => {
                self.course.pop();
                self.autocomplete_disabled = false;
            }
            GradeField::Grade => {
                self.grade.pop();
            }
        }
    }

    /// Validated `(course, grade)` pair.
    pub(crate) fn parse_inputs(&self) -> Result<(String, i32)> {
        let course = parse_course(&self.course)?;
        let grade = parse_grade(&self.grade)?;
        Ok((course, grade))
    }

    /// Suggest the first catalog course that starts with what was typed.
    pub(crate) fn update_suggestion(&mut self, catalog: &[String]) {
        if self.active != GradeField::Course
            || self.autocomplete_disabled
            || self.course.is_empty()
        {
            self.suggestion = None;
            return;
        }

        let current_lower = self.course.to_lowercase();
        self.suggestion = catalog
            .iter()
            .find(|candidate| candidate.to_lowercase().starts_with(&current_lower))
            .filter(|candidate| candidate.to_lowercase() != current_lower)
            .cloned();
    }

    /// Replace the typed prefix with the suggestion.
    pub(crate) fn accept_suggestion(&mut self) -> bool {
        match self.suggestion.take() {
            Some(candidate) if self.active == GradeField::Course => {
                self.course = candidate;
                self.autocomplete_disabled = true;
                true
            }
            _ => false,
        }
    }

    /// Dismiss the suggestion for the rest of this dialog.
    pub(crate) fn cancel_autocomplete(&mut self) -> bool {
        if self.has_active_suggestion() {
            self.autocomplete_disabled = true;
            self.suggestion = None;
            return true;
        }
        false
    }

    pub(crate) fn has_active_suggestion(&self) -> bool {
        self.active == GradeField::Course && self.suggestion.is_some()
    }

    /// Remaining characters of the suggestion, shown ghosted after the input.
    pub(crate) fn suggestion_suffix(&self) -> Option<String> {
        let candidate = self.suggestion.as_ref()?;
        let suffix: String = candidate.chars().skip(self.course.chars().count()).collect();
        if suffix.is_empty() {
            None
        } else {
            Some(suffix)
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: GradeField) -> Line<'static> {
        let value = match field {
            GradeField::Course => &self.course,
            GradeField::Grade => &self.grade,
        };
        let is_active = self.active == field;

        let style = if field == GradeField::Course && self.course_locked {
            Style::default().fg(Color::Gray)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let display = if value.is_empty() {
            match field {
                GradeField::Course => "<required>".to_string(),
                GradeField::Grade => "<0-100>".to_string(),
            }
        } else {
            value.clone()
        };

        let mut spans = vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ];
        if field == GradeField::Course && is_active && !value.is_empty() {
            if let Some(suffix) = self.suggestion_suffix() {
                spans.push(Span::styled(suffix, Style::default().fg(Color::DarkGray)));
            }
        }
        Line::from(spans)
    }

    pub(crate) fn value_len(&self, field: GradeField) -> usize {
        match field {
            GradeField::Course => self.course.chars().count(),
            GradeField::Grade => self.grade.chars().count(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmStudentDelete {
    pub(crate) id: StudentId,
    pub(crate) name: String,
    pub(crate) course_count: usize,
}

impl ConfirmStudentDelete {
    pub(crate) fn for_student(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            course_count: student.courses.len(),
        }
    }
}

/// State for confirming removal of a whole course.
pub(crate) struct ConfirmCourseDelete {
    pub(crate) id: StudentId,
    pub(crate) course: String,
    pub(crate) grade_count: usize,
}

/// State for confirming removal of a single grade.
pub(crate) struct ConfirmGradeDelete {
    pub(crate) id: StudentId,
    pub(crate) course: String,
    pub(crate) index: usize,
    pub(crate) grade: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        ["History", "Math", "Music"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn course_field_suggests_from_catalog() {
        let mut form = GradeForm::default();
        for ch in "mu".chars() {
            form.push_char(ch);
        }
        form.update_suggestion(&catalog());

        assert_eq!(form.suggestion.as_deref(), Some("Music"));
        assert_eq!(form.suggestion_suffix().as_deref(), Some("sic"));
        assert!(form.accept_suggestion());
        assert_eq!(form.course, "Music");
    }

    #[test]
    fn exact_match_needs_no_suggestion() {
        let mut form = GradeForm::default();
        for ch in "math".chars() {
            form.push_char(ch);
        }
        form.update_suggestion(&catalog());
        assert!(form.suggestion.is_none());
    }

    #[test]
    fn grade_field_rejects_letters() {
        let mut form = GradeForm::for_course(Some("Math"));
        assert!(!form.push_char('a'));
        assert!(form.push_char('9'));
        assert!(form.push_char('5'));
        assert_eq!(form.parse_inputs().unwrap(), ("Math".to_string(), 95));
    }

    #[test]
    fn out_of_range_grade_fails_validation() {
        let mut form = GradeForm::for_course(Some("Math"));
        for ch in "150".chars() {
            form.push_char(ch);
        }
        let err = form.parse_inputs().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn edit_form_keeps_course_locked() {
        let mut form = GradeForm::for_edit("Math", 80);
        form.toggle_field();
        assert!(form.active == GradeField::Grade);
        assert_eq!(form.grade, "80");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = NameForm::default();
        form.push_char(' ');
        assert!(form.parse_inputs().is_err());
        form.push_char('J');
        assert_eq!(form.parse_inputs().unwrap(), "J");
    }

    #[test]
    fn student_delete_confirmation_counts_courses() {
        let mut roster = crate::roster::Roster::new();
        let id = roster.add_student("Ana");
        roster.add_grade(id, "Math", 90).unwrap();
        roster.add_grade(id, "Art", 80).unwrap();

        let confirm = ConfirmStudentDelete::for_student(roster.student(id).unwrap());

        assert_eq!(confirm.id, id);
        assert_eq!(confirm.name, "Ana");
        assert_eq!(confirm.course_count, 2);
    }
}
