//! Error taxonomy shared by the roster core and the input validation layer.
//! Every failure the core can report is one of three kinds, so callers can
//! decide whether to re-prompt without string matching.

use thiserror::Error;

/// Failures surfaced by roster operations and caller-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A student, course, or grade position could not be resolved.
    #[error("{0} not found.")]
    NotFound(String),

    /// A value fell outside its accepted bounds.
    #[error("{}", describe_range(.what, .value, .min, .max))]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Text could not be turned into the value the caller asked for.
    #[error("{0}")]
    InvalidInput(String),
}

impl RosterError {
    pub(crate) fn student_not_found() -> Self {
        RosterError::NotFound("Student".to_string())
    }

    pub(crate) fn course_not_found(course: &str) -> Self {
        RosterError::NotFound(format!("Course '{course}'"))
    }

    /// Bounds error for a 0-based position inside a list of `len` items.
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        RosterError::OutOfRange {
            what: "Grade index",
            value: index as i64,
            min: 0,
            max: len as i64 - 1,
        }
    }
}

/// An empty list has `max < min`, which has no valid value to suggest.
fn describe_range(what: &str, value: &i64, min: &i64, max: &i64) -> String {
    if max < min {
        format!("{what} {value} is out of range (course has no grades).")
    } else {
        format!("{what} {value} is out of range (expected {min}..={max}).")
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_entity() {
        assert_eq!(
            RosterError::course_not_found("Math").to_string(),
            "Course 'Math' not found."
        );
        assert_eq!(
            RosterError::student_not_found().to_string(),
            "Student not found."
        );
    }

    #[test]
    fn index_error_reports_valid_bounds() {
        let err = RosterError::index_out_of_range(3, 2);
        assert_eq!(
            err.to_string(),
            "Grade index 3 is out of range (expected 0..=1)."
        );
    }

    #[test]
    fn index_error_on_empty_list_names_the_cause() {
        let err = RosterError::index_out_of_range(0, 0);
        assert_eq!(
            err.to_string(),
            "Grade index 0 is out of range (course has no grades)."
        );
        assert!(matches!(err, RosterError::OutOfRange { max: -1, .. }));
    }
}
