//! Line-oriented menu front end. Reads choices from any `BufRead` and writes
//! prompts to any `Write`, so scripted sessions drive it the same way a
//! terminal does. A blank answer or end of input cancels the current prompt.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::ExportSettings;
use crate::error::RosterError;
use crate::export::export_to_file;
use crate::input::{parse_course, parse_grade, parse_name, parse_index};
use crate::models::{letter_grade, StudentId};
use crate::roster::Roster;

const MENU: &[&str] = &[
    "Add Student",
    "Add Grade",
    "Calculate Average",
    "Display All Students",
    "Rename Student",
    "Delete Student",
    "Delete Course",
    "Edit Grade",
    "Delete Grade",
    "Export Report",
    "Exit",
];

const STUDENT_SEPARATOR: &str = "--------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddStudent,
    AddGrade,
    CalculateAverage,
    DisplayAll,
    RenameStudent,
    DeleteStudent,
    DeleteCourse,
    EditGrade,
    DeleteGrade,
    ExportReport,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        let choice = match raw.trim().parse::<u8>().ok()? {
            1 => MenuChoice::AddStudent,
            2 => MenuChoice::AddGrade,
            3 => MenuChoice::CalculateAverage,
            4 => MenuChoice::DisplayAll,
            5 => MenuChoice::RenameStudent,
            6 => MenuChoice::DeleteStudent,
            7 => MenuChoice::DeleteCourse,
            8 => MenuChoice::EditGrade,
            9 => MenuChoice::DeleteGrade,
            10 => MenuChoice::ExportReport,
            11 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Text menu session over a borrowed roster.
pub struct Console<R, W> {
    input: R,
    output: W,
    export: ExportSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, export: ExportSettings) -> Self {
        Self {
            input,
            output,
            export,
        }
    }

    /// Show the menu until the user exits or input runs out. Roster failures
    /// are printed and the loop carries on; only I/O errors end it early.
    pub fn run(&mut self, roster: &mut Roster) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(raw) = self.prompt("Choose an option: ")? else {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                writeln!(self.output, "Invalid choice. Try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::AddStudent => self.add_student(roster)?,
                MenuChoice::AddGrade => self.add_grade(roster)?,
                MenuChoice::CalculateAverage => self.calculate_average(roster)?,
                MenuChoice::DisplayAll => self.display_all(roster)?,
                MenuChoice::RenameStudent => self.rename_student(roster)?,
                MenuChoice::DeleteStudent => self.delete_student(roster)?,
                MenuChoice::DeleteCourse => self.delete_course(roster)?,
                MenuChoice::EditGrade => self.edit_grade(roster)?,
                MenuChoice::DeleteGrade => self.delete_grade(roster)?,
                MenuChoice::ExportReport => self.export_report(roster)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Student Grade Management System ===")?;
        for (idx, label) in MENU.iter().enumerate() {
            writeln!(self.output, "{}. {label}", idx + 1)?;
        }
        Ok(())
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Keep asking until `parse` accepts the answer. A blank line or end of
    /// input cancels and yields `None`.
    fn prompt_valid<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, RosterError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            if raw.trim().is_empty() {
                writeln!(self.output, "Cancelled.")?;
                return Ok(None);
            }
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn report(&mut self, err: RosterError) -> Result<()> {
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn select_student(&mut self, roster: &Roster) -> Result<Option<StudentId>> {
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(None);
        };
        match roster.find_student_id(name.trim()) {
            Some(id) => Ok(Some(id)),
            None => {
                writeln!(self.output, "Student not found.")?;
                Ok(None)
            }
        }
    }

    /// Ask for a course and show its numbered grades. Returns the course name
    /// and the number of grades when there is at least one.
    fn select_graded_course(
        &mut self,
        roster: &Roster,
        id: StudentId,
    ) -> Result<Option<(String, usize)>> {
        let Some(course) = self.prompt_valid("Enter course name: ", parse_course)? else {
            return Ok(None);
        };
        let grades = match roster.grades(id, &course) {
            Ok(grades) => grades,
            Err(err) => {
                self.report(err)?;
                return Ok(None);
            }
        };
        if grades.is_empty() {
            writeln!(self.output, "No grades recorded for {course}.")?;
            return Ok(None);
        }
        for (idx, grade) in grades.iter().enumerate() {
            writeln!(self.output, "  {}. {grade}", idx + 1)?;
        }
        let len = grades.len();
        Ok(Some((course, len)))
    }

    fn add_student(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(name) = self.prompt_valid("Enter student name: ", parse_name)? else {
            return Ok(());
        };
        roster.add_student(name);
        writeln!(self.output, "Student added.")?;
        Ok(())
    }

    fn add_grade(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some(course) = self.prompt_valid("Enter course name: ", parse_course)? else {
            return Ok(());
        };
        let Some(grade) = self.prompt_valid("Enter grade: ", parse_grade)? else {
            return Ok(());
        };
        match roster.add_grade(id, &course, grade) {
            Ok(()) => writeln!(self.output, "Grade added.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn calculate_average(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some(course) = self.prompt_valid("Enter course name: ", parse_course)? else {
            return Ok(());
        };
        let student = match roster.student(id) {
            Ok(student) => student,
            Err(err) => return self.report(err),
        };
        let average = student.average(&course);
        writeln!(
            self.output,
            "Average for {} in {course}: {average:.2} ({})",
            student.name,
            letter_grade(average)
        )?;
        Ok(())
    }

    fn display_all(&mut self, roster: &Roster) -> Result<()> {
        let rows = roster.list_all();
        if rows.is_empty() {
            writeln!(self.output, "No students found.")?;
            return Ok(());
        }

        writeln!(self.output, "\n=== All Students ===")?;
        let mut current = None;
        for row in rows {
            if current != Some(row.student_id) {
                if current.is_some() {
                    writeln!(self.output, "{STUDENT_SEPARATOR}")?;
                }
                writeln!(self.output, "Student: {}", row.student)?;
                current = Some(row.student_id);
            }
            match row.course {
                Some(summary) => writeln!(
                    self.output,
                    "  {} → Average: {}",
                    summary.name,
                    summary.display_average()
                )?,
                None => writeln!(self.output, "  No courses or grades added yet.")?,
            }
        }
        writeln!(self.output, "{STUDENT_SEPARATOR}")?;
        Ok(())
    }

    fn rename_student(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some(name) = self.prompt_valid("Enter new name: ", parse_name)? else {
            return Ok(());
        };
        match roster.rename_student(id, name) {
            Ok(()) => writeln!(self.output, "Student renamed.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn delete_student(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        match roster.delete_student(id) {
            Ok(student) => writeln!(self.output, "Deleted {}.", student.name)?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn delete_course(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some(course) = self.prompt_valid("Enter course name: ", parse_course)? else {
            return Ok(());
        };
        match roster.delete_course(id, &course) {
            Ok(_) => writeln!(self.output, "Course deleted.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn edit_grade(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some((course, len)) = self.select_graded_course(roster, id)? else {
            return Ok(());
        };
        let Some(index) =
            self.prompt_valid("Enter grade number: ", |raw| parse_index(raw, len))?
        else {
            return Ok(());
        };
        let Some(grade) = self.prompt_valid("Enter new grade: ", parse_grade)? else {
            return Ok(());
        };
        match roster.edit_grade(id, &course, index, grade) {
            Ok(previous) => writeln!(self.output, "Grade changed from {previous} to {grade}.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn delete_grade(&mut self, roster: &mut Roster) -> Result<()> {
        let Some(id) = self.select_student(roster)? else {
            return Ok(());
        };
        let Some((course, len)) = self.select_graded_course(roster, id)? else {
            return Ok(());
        };
        let Some(index) =
            self.prompt_valid("Enter grade number: ", |raw| parse_index(raw, len))?
        else {
            return Ok(());
        };
        match roster.delete_grade(id, &course, index) {
            Ok(removed) => writeln!(self.output, "Removed grade {removed}.")?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn export_report(&mut self, roster: &Roster) -> Result<()> {
        match export_to_file(roster, &self.export) {
            Ok(path) => {
                info!(path = %path.display(), "console export");
                writeln!(self.output, "Report written to {}.", path.display())?;
            }
            Err(err) => writeln!(self.output, "Export failed: {err:#}")?,
        }
        Ok(())
    }
}
