use std::fmt::Write as _;

use crate::models::{CourseSummary, ReportRow};

use super::Roster;

const REPORT_HEADER: &str = "=== Student Grade Report ===";
const STUDENT_SEPARATOR: &str = "--------------------------------";

impl Roster {
    /// One row per (student, course) in display order. Students without any
    /// course still appear once with `course: None`; an empty roster yields
    /// no rows at all.
    pub fn list_all(&self) -> Vec<ReportRow> {
        let mut rows = Vec::new();
        for student in &self.students {
            if student.courses.is_empty() {
                rows.push(ReportRow {
                    student_id: student.id,
                    student: student.name.clone(),
                    course: None,
                });
                continue;
            }
            rows.extend(student.courses.iter().map(|course| ReportRow {
                student_id: student.id,
                student: student.name.clone(),
                course: Some(CourseSummary::from_course(course)),
            }));
        }
        rows
    }

    /// Human-readable dump of every student, course, and grade. Writing the
    /// text anywhere is left to the caller.
    pub fn export_report(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_HEADER);
        out.push('\n');

        if self.students.is_empty() {
            out.push_str("No students found.\n");
            return out;
        }

        for student in &self.students {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "Student: {}", student.name);
            if student.courses.is_empty() {
                out.push_str("  No courses or grades added yet.\n");
            }
            for course in &student.courses {
                let summary = CourseSummary::from_course(course);
                let grades = if course.grades.is_empty() {
                    "no grades".to_string()
                } else {
                    course.joined_grades()
                };
                let _ = writeln!(
                    out,
                    "  {}: {} | Average: {:.2} ({})",
                    course.name, grades, summary.average, summary.letter
                );
            }
            out.push_str(STUDENT_SEPARATOR);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::LetterGrade;
    use crate::roster::Roster;

    #[test]
    fn empty_roster_lists_nothing() {
        assert!(Roster::new().list_all().is_empty());
    }

    #[test]
    fn student_without_courses_gets_one_marker_row() {
        let mut roster = Roster::new();
        roster.add_student("Ben");

        let rows = roster.list_all();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student, "Ben");
        assert!(rows[0].is_no_courses());
    }

    #[test]
    fn rows_follow_student_then_course_creation_order() {
        let mut roster = Roster::new();
        let ana = roster.add_student("Ana");
        let ben = roster.add_student("Ben");
        roster.add_grade(ben, "Math", 95).unwrap();
        roster.add_grade(ana, "Science", 65).unwrap();
        roster.add_grade(ana, "Art", 85).unwrap();
        roster.add_grade(ana, "Science", 75).unwrap();

        let rows: Vec<_> = roster
            .list_all()
            .into_iter()
            .map(|row| {
                let course = row.course.unwrap();
                (row.student, course.name, course.average, course.letter)
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Ana".to_string(), "Science".to_string(), 70.0, LetterGrade::C),
                ("Ana".to_string(), "Art".to_string(), 85.0, LetterGrade::B),
                ("Ben".to_string(), "Math".to_string(), 95.0, LetterGrade::A),
            ]
        );
    }

    #[test]
    fn emptied_course_is_listed_as_no_grades() {
        let mut roster = Roster::new();
        let id = roster.add_student("Cleo");
        roster.add_grade(id, "Music", 40).unwrap();
        roster.delete_grade(id, "Music", 0).unwrap();

        let rows = roster.list_all();
        let summary = rows[0].course.as_ref().unwrap();

        assert!(!summary.has_grades());
        assert_eq!(summary.letter, LetterGrade::F);
        assert_eq!(summary.display_average(), "no grades");
    }

    #[test]
    fn export_renders_grades_and_placeholders() {
        let mut roster = Roster::new();
        let ana = roster.add_student("Ana");
        roster.add_grade(ana, "Math", 60).unwrap();
        roster.add_grade(ana, "Math", 70).unwrap();
        roster.add_grade(ana, "Math", 80).unwrap();
        roster.add_grade(ana, "Art", 90).unwrap();
        roster.delete_grade(ana, "Art", 0).unwrap();
        roster.add_student("Ben");

        let expected = "\
=== Student Grade Report ===
Student: Ana
  Math: 60, 70, 80 | Average: 70.00 (C)
  Art: no grades | Average: 0.00 (F)
--------------------------------
Student: Ben
  No courses or grades added yet.
--------------------------------
";
        assert_eq!(roster.export_report(), expected);
    }

    #[test]
    fn export_of_empty_roster_says_so() {
        assert_eq!(
            Roster::new().export_report(),
            "=== Student Grade Report ===\nNo students found.\n"
        );
    }
}
