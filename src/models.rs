//! Domain models held by the roster and passed to both front ends. These types
//! stay plain data holders; the mutation rules live in `roster` so the
//! invariants are enforced in one place.

use std::fmt;

/// Opaque handle to a student inside one roster. Handles are never reused, so
/// a handle kept across a deletion resolves to "not found" instead of silently
/// pointing at a different student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub(crate) u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A named bucket of grades belonging to one student.
pub struct Course {
    /// Case-sensitive key within the owning student.
    pub name: String,
    /// Grades in the order they were recorded. Duplicates are allowed.
    pub grades: Vec<i32>,
}

impl Course {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Arithmetic mean of the recorded grades, `0.0` when there are none.
    /// Summed in `i64` so any `i32` grade is tolerated.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.grades.iter().map(|&grade| i64::from(grade)).sum();
        sum as f64 / self.grades.len() as f64
    }

    /// Comma-joined grade list used by the text report.
    pub fn joined_grades(&self) -> String {
        self.grades
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One tracked student. Names are display strings only; identity is the
/// `id` handed out by the roster.
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Courses in the order they were first created.
    pub courses: Vec<Course>,
}

impl Student {
    pub(crate) fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Look up a course by its exact (case-sensitive) name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.name == name)
    }

    pub(crate) fn course_mut(&mut self, name: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.name == name)
    }

    /// Average for a course, `0.0` when the course is missing or empty.
    pub fn average(&self, course: &str) -> f64 {
        self.course(course).map_or(0.0, Course::average)
    }

    /// Case-insensitive name comparison used by roster lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Five-band classification of an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Lower bounds are inclusive: 90 is an A, 89.999 a B. Anything that does
    /// not compare (NaN) falls through to F.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            LetterGrade::A
        } else if average >= 80.0 {
            LetterGrade::B
        } else if average >= 70.0 {
            LetterGrade::C
        } else if average >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`LetterGrade::from_average`].
pub fn letter_grade(average: f64) -> LetterGrade {
    LetterGrade::from_average(average)
}

/// Derived figures for one course of one student.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub name: String,
    /// Zero marks a course that exists but has no grades yet.
    pub grade_count: usize,
    pub average: f64,
    pub letter: LetterGrade,
}

impl CourseSummary {
    pub fn from_course(course: &Course) -> Self {
        let average = course.average();
        Self {
            name: course.name.clone(),
            grade_count: course.grades.len(),
            average,
            letter: letter_grade(average),
        }
    }

    pub fn has_grades(&self) -> bool {
        self.grade_count > 0
    }

    /// `"81.67 (B)"`, or `"no grades"` for an empty course.
    pub fn display_average(&self) -> String {
        if self.has_grades() {
            format!("{:.2} ({})", self.average, self.letter)
        } else {
            "no grades".to_string()
        }
    }
}

/// One line of the roster listing. A student without courses still gets a
/// row, with `course` set to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Keeps rows of same-named students apart.
    pub student_id: StudentId,
    pub student: String,
    pub course: Option<CourseSummary>,
}

impl ReportRow {
    pub fn is_no_courses(&self) -> bool {
        self.course.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_bands_are_inclusive_at_the_lower_edge() {
        let cases = [
            (100.0, LetterGrade::A),
            (90.0, LetterGrade::A),
            (89.999, LetterGrade::B),
            (80.0, LetterGrade::B),
            (79.999, LetterGrade::C),
            (70.0, LetterGrade::C),
            (69.5, LetterGrade::D),
            (60.0, LetterGrade::D),
            (59.999, LetterGrade::F),
            (0.0, LetterGrade::F),
            (-20.0, LetterGrade::F),
        ];
        for (average, expected) in cases {
            assert_eq!(letter_grade(average), expected, "average {average}");
        }
    }

    #[test]
    fn nan_average_is_an_f() {
        assert_eq!(letter_grade(f64::NAN), LetterGrade::F);
    }

    #[test]
    fn course_average_uses_real_division() {
        let mut course = Course::new("Math");
        course.grades = vec![70, 80, 95];
        assert!((course.average() - 245.0 / 3.0).abs() < 1e-9);
        assert_eq!(letter_grade(course.average()), LetterGrade::B);
    }

    #[test]
    fn average_tolerates_extreme_grades() {
        let mut course = Course::new("Overflow");
        course.grades = vec![i32::MAX, i32::MAX];
        assert_eq!(course.average(), f64::from(i32::MAX));
    }

    #[test]
    fn empty_course_summary_reads_no_grades() {
        let summary = CourseSummary::from_course(&Course::new("Art"));
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.letter, LetterGrade::F);
        assert_eq!(summary.display_average(), "no grades");
    }

    #[test]
    fn student_name_match_ignores_case() {
        let student = Student::new(StudentId(0), "Ana");
        assert!(student.name_matches("ana"));
        assert!(student.name_matches("ANA"));
        assert!(!student.name_matches("Anna"));
    }
}
