//! Validation performed by the front ends before anything reaches the roster.
//! The core accepts any string and any integer, so blank names and grades
//! outside 0..=100 are stopped here.

use crate::error::{Result, RosterError};

/// Lowest grade a user may enter.
pub const MIN_GRADE: i32 = 0;
/// Highest grade a user may enter.
pub const MAX_GRADE: i32 = 100;

/// Trim a student name and reject it when nothing is left.
pub fn parse_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RosterError::InvalidInput(
            "Student name is required.".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Trim a course name and reject it when nothing is left.
pub fn parse_course(raw: &str) -> Result<String> {
    let course = raw.trim();
    if course.is_empty() {
        return Err(RosterError::InvalidInput(
            "Course name is required.".to_string(),
        ));
    }
    Ok(course.to_string())
}

/// Parse a grade and check it against `MIN_GRADE..=MAX_GRADE`.
pub fn parse_grade(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    let grade = trimmed.parse::<i64>().map_err(|_| {
        RosterError::InvalidInput(format!("Grade must be a whole number, got '{trimmed}'."))
    })?;
    if !(i64::from(MIN_GRADE)..=i64::from(MAX_GRADE)).contains(&grade) {
        return Err(RosterError::OutOfRange {
            what: "Grade",
            value: grade,
            min: i64::from(MIN_GRADE),
            max: i64::from(MAX_GRADE),
        });
    }
    Ok(grade as i32)
}

/// Turn a 1-based position typed by a user into a 0-based index into a list
/// of `len` items.
pub fn parse_index(raw: &str, len: usize) -> Result<usize> {
    let trimmed = raw.trim();
    let position = trimmed.parse::<i64>().map_err(|_| {
        RosterError::InvalidInput(format!("Position must be a whole number, got '{trimmed}'."))
    })?;
    if position < 1 || position > len as i64 {
        return Err(RosterError::OutOfRange {
            what: "Position",
            value: position,
            min: 1,
            max: len as i64,
        });
    }
    Ok(position as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(parse_name("  Ana \n").unwrap(), "Ana");
        assert!(matches!(
            parse_name("   "),
            Err(RosterError::InvalidInput(_))
        ));
        assert!(matches!(parse_course(""), Err(RosterError::InvalidInput(_))));
    }

    #[test]
    fn grade_bounds_are_inclusive() {
        assert_eq!(parse_grade("0").unwrap(), 0);
        assert_eq!(parse_grade(" 100 ").unwrap(), 100);
        assert!(matches!(
            parse_grade("101"),
            Err(RosterError::OutOfRange { value: 101, .. })
        ));
        assert!(matches!(
            parse_grade("-1"),
            Err(RosterError::OutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn non_numeric_grade_is_invalid_input() {
        assert!(matches!(
            parse_grade("abc"),
            Err(RosterError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_grade("85.5"),
            Err(RosterError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_grade("99999999999999999999"),
            Err(RosterError::InvalidInput(_))
        ));
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_index("1", 3).unwrap(), 0);
        assert_eq!(parse_index("3", 3).unwrap(), 2);
        assert!(matches!(
            parse_index("0", 3),
            Err(RosterError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_index("4", 3),
            Err(RosterError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_index("1", 0),
            Err(RosterError::OutOfRange { .. })
        ));
    }
}
