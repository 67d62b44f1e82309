use grade_roster::{letter_grade, LetterGrade, Roster, RosterError};
use pretty_assertions::assert_eq;

#[test]
fn rename_and_course_removal_round_trip() {
    let mut roster = Roster::new();
    let ben = roster.add_student("Ben");
    for grade in [60, 70, 80] {
        roster.add_grade(ben, "Math", grade).unwrap();
    }

    let average = roster.average(ben, "Math").unwrap();
    assert_eq!(average, 70.0);
    assert_eq!(letter_grade(average), LetterGrade::C);

    roster.rename_student(ben, "Benjamin").unwrap();
    assert!(roster.find_student("ben").is_none());
    assert_eq!(roster.find_student_id("Benjamin"), Some(ben));

    roster.delete_course(ben, "Math").unwrap();
    assert_eq!(roster.average(ben, "Math").unwrap(), 0.0);
    assert_eq!(roster.len(), 1);
}

#[test]
fn lookups_share_one_entity_across_casing() {
    let mut roster = Roster::new();
    roster.add_student("Ana");

    let lower = roster.find_student("ana").unwrap().id;
    let upper = roster.find_student("ANA").unwrap().id;

    assert_eq!(lower, upper);
}

#[test]
fn failed_operations_leave_roster_untouched() {
    let mut roster = Roster::new();
    let ana = roster.add_student("Ana");
    roster.add_grade(ana, "Math", 88).unwrap();
    let before = roster.export_report();

    assert!(matches!(
        roster.delete_course(ana, "Chemistry"),
        Err(RosterError::NotFound(_))
    ));
    assert!(matches!(
        roster.edit_grade(ana, "Math", 1, 90),
        Err(RosterError::OutOfRange { .. })
    ));
    assert!(matches!(
        roster.delete_grade(ana, "Math", 7),
        Err(RosterError::OutOfRange { .. })
    ));

    assert_eq!(roster.export_report(), before);
}

#[test]
fn empty_roster_differs_from_student_without_courses() {
    let mut roster = Roster::new();
    assert_eq!(roster.list_all().len(), 0);

    roster.add_student("Dana");
    let rows = roster.list_all();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].course.is_none());
}

#[test]
fn deleting_last_course_keeps_student() {
    let mut roster = Roster::new();
    let eli = roster.add_student("Eli");
    roster.add_grade(eli, "Music", 91).unwrap();

    roster.delete_course(eli, "Music").unwrap();

    assert_eq!(roster.find_student_id("eli"), Some(eli));
    assert!(roster.list_all()[0].is_no_courses());
}

#[test]
fn independent_rosters_do_not_share_state() {
    let mut first = Roster::new();
    let second = Roster::new();
    first.add_student("Fay");

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
