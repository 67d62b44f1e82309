use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::config::{Config, ExportSettings};
use crate::export::export_to_file;
use crate::models::{CourseSummary, Student, StudentId};
use crate::roster::Roster;

use super::forms::{
    ConfirmCourseDelete, ConfirmGradeDelete, ConfirmStudentDelete, GradeField, GradeForm,
    NameForm,
};
use super::helpers::{centered_rect, course_summary_line, surface_error};
use super::screens::{step, Pane, StudentScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;

/// Top-level views.
enum Screen {
    Students,
    Student(StudentScreen),
}

/// Modal state layered over the current screen.
enum Mode {
    Normal,
    AddingStudent(NameForm),
    RenamingStudent {
        id: StudentId,
        form: NameForm,
    },
    FindingStudent(NameForm),
    ConfirmStudentDelete(ConfirmStudentDelete),
    AddingGrade {
        id: StudentId,
        form: GradeForm,
    },
    EditingGrade {
        id: StudentId,
        index: usize,
        form: GradeForm,
    },
    ConfirmCourseDelete(ConfirmCourseDelete),
    ConfirmGradeDelete(ConfirmGradeDelete),
}

/// Footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// What a key press did to a text dialog.
enum FormKey {
    Cancel,
    Submit,
    Other,
}

/// Application state for the dialog interface. Owns the roster for the
/// duration of the session.
pub struct App {
    roster: Roster,
    catalog: Vec<String>,
    export: ExportSettings,
    selected: usize,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(roster: Roster, config: &Config) -> Self {
        Self {
            roster,
            catalog: config.catalog.courses.clone(),
            export: config.export.clone(),
            selected: 0,
            screen: Screen::Students,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Hand the roster back once the session ends.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Feed one key press through the current mode. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => match self.screen {
                Screen::Students => self.handle_students_key(code, &mut exit)?,
                Screen::Student(_) => self.handle_student_key(code, &mut exit)?,
            },
            Mode::AddingStudent(form) => self.handle_add_student(code, form)?,
            Mode::RenamingStudent { id, form } => self.handle_rename_student(code, id, form)?,
            Mode::FindingStudent(form) => self.handle_find_student(code, form)?,
            Mode::ConfirmStudentDelete(confirm) => {
                self.handle_confirm_student_delete(code, confirm)?
            }
            Mode::AddingGrade { id, form } => self.handle_add_grade(code, id, form)?,
            Mode::EditingGrade { id, index, form } => {
                self.handle_edit_grade(code, id, index, form)?
            }
            Mode::ConfirmCourseDelete(confirm) => {
                self.handle_confirm_course_delete(code, confirm)?
            }
            Mode::ConfirmGradeDelete(confirm) => self.handle_confirm_grade_delete(code, confirm)?,
        };

        Ok(exit)
    }

    fn handle_students_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.move_student(-1),
            KeyCode::Down => self.move_student(1),
            KeyCode::PageUp => self.move_student(-PAGE_STEP),
            KeyCode::PageDown => self.move_student(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.roster.len().saturating_sub(1),
            KeyCode::Enter => match self.current_student().map(|s| s.id) {
                Some(id) => {
                    self.clear_status();
                    self.screen = Screen::Student(StudentScreen::new(id));
                }
                None => self.set_status("No student selected.", StatusKind::Error),
            },
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingStudent(NameForm::default()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                match self
                    .current_student()
                    .map(|s| (s.id, NameForm::from_student(s)))
                {
                    Some((id, form)) => {
                        self.clear_status();
                        return Ok(Mode::RenamingStudent { id, form });
                    }
                    None => self.set_status("No student selected to rename.", StatusKind::Error),
                }
            }
            KeyCode::Char('-') => {
                match self.current_student().map(ConfirmStudentDelete::for_student) {
                    Some(confirm) => {
                        self.clear_status();
                        return Ok(Mode::ConfirmStudentDelete(confirm));
                    }
                    None => self.set_status("No student selected to delete.", StatusKind::Error),
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.clear_status();
                return Ok(Mode::FindingStudent(NameForm::default()));
            }
            KeyCode::Char('x') | KeyCode::Char('X') => self.export_report(),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_student_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let id = match &self.screen {
            Screen::Student(screen) => screen.id,
            Screen::Students => return Ok(Mode::Normal),
        };
        if self.roster.student(id).is_err() {
            self.screen = Screen::Students;
            self.set_status("That student no longer exists.", StatusKind::Error);
            return Ok(Mode::Normal);
        }

        let mut status_to_set: Option<(String, StatusKind)> = None;
        let mut back_to_students = false;
        let mut export = false;

        if let (Screen::Student(screen), Ok(student)) =
            (&mut self.screen, self.roster.student(id))
        {
            match code {
                KeyCode::Char('q') => *exit = true,
                KeyCode::Esc => back_to_students = true,
                KeyCode::Tab | KeyCode::BackTab => screen.toggle_focus(),
                KeyCode::Up => screen.move_selection(-1, student),
                KeyCode::Down => screen.move_selection(1, student),
                KeyCode::PageUp => screen.move_selection(-PAGE_STEP, student),
                KeyCode::PageDown => screen.move_selection(PAGE_STEP, student),
                KeyCode::Home => screen.select_first(student),
                KeyCode::End => screen.select_last(student),
                KeyCode::Char('+') => {
                    let course = screen.current_course(student).map(|c| c.name.as_str());
                    return Ok(Mode::AddingGrade {
                        id,
                        form: GradeForm::for_course(course),
                    });
                }
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    let target = match screen.focus {
                        Pane::Grades => screen
                            .current_course(student)
                            .zip(screen.current_grade(student)),
                        Pane::Courses => None,
                    };
                    match target {
                        Some((course, (index, grade))) => {
                            return Ok(Mode::EditingGrade {
                                id,
                                index,
                                form: GradeForm::for_edit(&course.name, grade),
                            });
                        }
                        None => {
                            status_to_set = Some((
                                "Select a grade to edit (Tab switches panes).".to_string(),
                                StatusKind::Error,
                            ));
                        }
                    }
                }
                KeyCode::Char('-') => match screen.focus {
                    Pane::Courses => match screen.current_course(student) {
                        Some(course) => {
                            return Ok(Mode::ConfirmCourseDelete(ConfirmCourseDelete {
                                id,
                                course: course.name.clone(),
                                grade_count: course.grades.len(),
                            }));
                        }
                        None => {
                            status_to_set =
                                Some(("No course selected.".to_string(), StatusKind::Error));
                        }
                    },
                    Pane::Grades => {
                        let target = screen
                            .current_course(student)
                            .zip(screen.current_grade(student));
                        match target {
                            Some((course, (index, grade))) => {
                                return Ok(Mode::ConfirmGradeDelete(ConfirmGradeDelete {
                                    id,
                                    course: course.name.clone(),
                                    index,
                                    grade,
                                }));
                            }
                            None => {
                                status_to_set =
                                    Some(("No grade selected.".to_string(), StatusKind::Error));
                            }
                        }
                    }
                },
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    return Ok(Mode::RenamingStudent {
                        id,
                        form: NameForm::from_student(student),
                    });
                }
                KeyCode::Char('x') | KeyCode::Char('X') => export = true,
                _ => {}
            }
        }

        if back_to_students {
            self.screen = Screen::Students;
            self.focus_student(id);
            self.clear_status();
        } else if export {
            self.export_report();
        } else if let Some((text, kind)) = status_to_set {
            self.set_status(text, kind);
        }

        Ok(Mode::Normal)
    }

    fn handle_add_student(&mut self, code: KeyCode, mut form: NameForm) -> Result<Mode> {
        match edit_name_form(code, &mut form) {
            FormKey::Cancel => {
                self.set_status("Add student cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            FormKey::Submit => match self.save_new_student(&form) {
                Ok(()) => Ok(Mode::Normal),
                Err(err) => {
                    self.show_form_error(&mut form.error, &err);
                    Ok(Mode::AddingStudent(form))
                }
            },
            FormKey::Other => Ok(Mode::AddingStudent(form)),
        }
    }

    fn handle_rename_student(
        &mut self,
        code: KeyCode,
        id: StudentId,
        mut form: NameForm,
    ) -> Result<Mode> {
        match edit_name_form(code, &mut form) {
            FormKey::Cancel => {
                self.set_status("Rename cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            FormKey::Submit => match self.save_renamed_student(id, &form) {
                Ok(()) => Ok(Mode::Normal),
                Err(err) => {
                    self.show_form_error(&mut form.error, &err);
                    Ok(Mode::RenamingStudent { id, form })
                }
            },
            FormKey::Other => Ok(Mode::RenamingStudent { id, form }),
        }
    }

    fn handle_find_student(&mut self, code: KeyCode, mut form: NameForm) -> Result<Mode> {
        match edit_name_form(code, &mut form) {
            FormKey::Cancel => {
                self.set_status("Find cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            FormKey::Submit => {
                let found = form
                    .parse_inputs()
                    .map(|name| self.roster.find_student_id(&name));
                match found {
                    Ok(Some(id)) => {
                        self.focus_student(id);
                        self.screen = Screen::Student(StudentScreen::new(id));
                        self.clear_status();
                        Ok(Mode::Normal)
                    }
                    Ok(None) => {
                        form.error = Some("Student not found.".to_string());
                        Ok(Mode::FindingStudent(form))
                    }
                    Err(err) => {
                        self.show_form_error(&mut form.error, &err);
                        Ok(Mode::FindingStudent(form))
                    }
                }
            }
            FormKey::Other => Ok(Mode::FindingStudent(form)),
        }
    }

    fn handle_confirm_student_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmStudentDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.roster.delete_student(confirm.id) {
                    Ok(student) => {
                        self.screen = Screen::Students;
                        self.clamp_selected();
                        self.set_status(format!("Deleted {}.", student.name), StatusKind::Info);
                    }
                    Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                }
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmStudentDelete(confirm)),
        }
    }

    fn handle_add_grade(&mut self, code: KeyCode, id: StudentId, mut form: GradeForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                if !form.cancel_autocomplete() {
                    self.set_status("Add grade cancelled.", StatusKind::Info);
                    keep_open = false;
                }
            }
            KeyCode::Tab => {
                if !form.accept_suggestion() {
                    form.toggle_field();
                }
                form.update_suggestion(&self.catalog);
            }
            KeyCode::BackTab => {
                form.toggle_field();
                form.update_suggestion(&self.catalog);
            }
            KeyCode::Backspace => {
                form.backspace();
                form.update_suggestion(&self.catalog);
            }
            KeyCode::Enter => match self.save_new_grade(id, &form) {
                Ok(()) => keep_open = false,
                Err(err) => self.show_form_error(&mut form.error, &err),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                    form.update_suggestion(&self.catalog);
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingGrade { id, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_grade(
        &mut self,
        code: KeyCode,
        id: StudentId,
        index: usize,
        mut form: GradeForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_edited_grade(id, index, &form) {
                Ok(()) => keep_open = false,
                Err(err) => self.show_form_error(&mut form.error, &err),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingGrade { id, index, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_course_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmCourseDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.roster.delete_course(confirm.id, &confirm.course) {
                    Ok(_) => {
                        self.refresh_student_screen();
                        self.set_status(
                            format!("Deleted course {}.", confirm.course),
                            StatusKind::Info,
                        );
                    }
                    Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                }
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmCourseDelete(confirm)),
        }
    }

    fn handle_confirm_grade_delete(
        &mut self,
        code: KeyCode,
        confirm: ConfirmGradeDelete,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self
                    .roster
                    .delete_grade(confirm.id, &confirm.course, confirm.index)
                {
                    Ok(removed) => {
                        self.refresh_student_screen();
                        self.set_status(
                            format!("Removed grade {removed} from {}.", confirm.course),
                            StatusKind::Info,
                        );
                    }
                    Err(err) => self.set_status(err.to_string(), StatusKind::Error),
                }
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmGradeDelete(confirm)),
        }
    }

    fn save_new_student(&mut self, form: &NameForm) -> Result<()> {
        let name = form.parse_inputs()?;
        let id = self.roster.add_student(name.clone());
        self.focus_student(id);
        self.set_status(format!("Added {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_renamed_student(&mut self, id: StudentId, form: &NameForm) -> Result<()> {
        let name = form.parse_inputs()?;
        self.roster.rename_student(id, name.clone())?;
        self.set_status(format!("Renamed to {name}."), StatusKind::Info);
        Ok(())
    }

    fn save_new_grade(&mut self, id: StudentId, form: &GradeForm) -> Result<()> {
        let (course, grade) = form.parse_inputs()?;
        self.roster.add_grade(id, &course, grade)?;
        if let (Screen::Student(screen), Ok(student)) =
            (&mut self.screen, self.roster.student(id))
        {
            screen.focus_course(student, &course);
        }
        self.set_status(format!("Recorded {grade} in {course}."), StatusKind::Info);
        Ok(())
    }

    fn save_edited_grade(&mut self, id: StudentId, index: usize, form: &GradeForm) -> Result<()> {
        let (course, grade) = form.parse_inputs()?;
        let previous = self.roster.edit_grade(id, &course, index, grade)?;
        self.set_status(
            format!("Changed {course} grade {previous} to {grade}."),
            StatusKind::Info,
        );
        Ok(())
    }

    fn export_report(&mut self) {
        match export_to_file(&self.roster, &self.export) {
            Ok(path) => self.set_status(
                format!("Report written to {}.", path.display()),
                StatusKind::Info,
            ),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "export failed");
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    fn show_form_error(&mut self, slot: &mut Option<String>, err: &anyhow::Error) {
        let message = surface_error(err);
        debug!(%message, "form rejected");
        *slot = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    fn refresh_student_screen(&mut self) {
        if let Screen::Student(screen) = &mut self.screen {
            if let Ok(student) = self.roster.student(screen.id) {
                screen.ensure_in_bounds(student);
            }
        }
    }

    fn current_student(&self) -> Option<&Student> {
        self.roster.students().get(self.selected)
    }

    fn focus_student(&mut self, id: StudentId) {
        if let Some(idx) = self.roster.students().iter().position(|s| s.id == id) {
            self.selected = idx;
        }
    }

    fn move_student(&mut self, offset: isize) {
        self.selected = step(self.selected, offset, self.roster.len());
    }

    fn clamp_selected(&mut self) {
        self.selected = self.selected.min(self.roster.len().saturating_sub(1));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Students => self.draw_student_list(frame, content_area),
            Screen::Student(screen) => self.draw_student_view(frame, content_area, screen),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingStudent(form) => self.draw_name_form(frame, area, "Add Student", form),
            Mode::RenamingStudent { form, .. } => {
                self.draw_name_form(frame, area, "Rename Student", form)
            }
            Mode::FindingStudent(form) => self.draw_name_form(frame, area, "Find Student", form),
            Mode::ConfirmStudentDelete(confirm) => {
                let courses = match confirm.course_count {
                    0 => "They have no courses.".to_string(),
                    1 => "Their 1 course and its grades go with them.".to_string(),
                    n => format!("Their {n} courses and all grades go with them."),
                };
                self.draw_confirm(
                    frame,
                    area,
                    "Confirm Deletion",
                    vec![
                        Line::from(format!("Delete student {}?", confirm.name)),
                        Line::from(courses),
                    ],
                );
            }
            Mode::AddingGrade { form, .. } => self.draw_grade_form(frame, area, "Add Grade", form),
            Mode::EditingGrade { form, .. } => {
                self.draw_grade_form(frame, area, "Edit Grade", form)
            }
            Mode::ConfirmCourseDelete(confirm) => self.draw_confirm(
                frame,
                area,
                "Confirm Course Removal",
                vec![
                    Line::from(format!("Delete course {}?", confirm.course)),
                    Line::from(format!("{} grade(s) will be removed.", confirm.grade_count)),
                ],
            ),
            Mode::ConfirmGradeDelete(confirm) => self.draw_confirm(
                frame,
                area,
                "Confirm Grade Removal",
                vec![Line::from(format!(
                    "Remove grade #{} ({}) from {}?",
                    confirm.index + 1,
                    confirm.grade,
                    confirm.course
                ))],
            ),
            Mode::Normal => {}
        }
    }

    fn draw_student_list(&self, frame: &mut Frame, area: Rect) {
        if self.roster.is_empty() {
            let message = Paragraph::new("No students yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Students"));
            frame.render_widget(message, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let items: Vec<ListItem> = self
            .roster
            .students()
            .iter()
            .map(|student| {
                let courses = match student.courses.len() {
                    1 => "1 course".to_string(),
                    n => format!("{n} courses"),
                };
                ListItem::new(Line::from(vec![
                    Span::raw(student.name.clone()),
                    Span::styled(format!("  ({courses})"), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Students ({})", self.roster.len())),
            )
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        let preview_block = Block::default().borders(Borders::ALL).title("Courses");
        let lines: Vec<Line> = match self.current_student() {
            Some(student) if student.courses.is_empty() => vec![Line::from(Span::styled(
                "No courses or grades added yet.",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(student) => student
                .courses
                .iter()
                .map(|course| course_summary_line(&CourseSummary::from_course(course)))
                .collect(),
            None => Vec::new(),
        };
        let preview = Paragraph::new(lines)
            .block(preview_block)
            .wrap(Wrap { trim: true });
        frame.render_widget(preview, chunks[1]);
    }

    fn draw_student_view(&self, frame: &mut Frame, area: Rect, screen: &StudentScreen) {
        let Ok(student) = self.roster.student(screen.id) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                student.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  •  {} course(s)", student.courses.len())),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Student"));
        frame.render_widget(header, chunks[0]);

        if student.courses.is_empty() {
            let message = Paragraph::new("No courses yet. Press '+' to record a grade.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        let pane_block = |title: String, focused: bool| {
            let block = Block::default().borders(Borders::ALL).title(title);
            if focused {
                block.border_style(Style::default().fg(Color::Yellow))
            } else {
                block
            }
        };

        let course_items: Vec<ListItem> = student
            .courses
            .iter()
            .map(|course| ListItem::new(course_summary_line(&CourseSummary::from_course(course))))
            .collect();
        let courses = List::new(course_items)
            .block(pane_block(
                "Courses".to_string(),
                screen.focus == Pane::Courses,
            ))
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");
        let mut course_state = ListState::default();
        course_state.select(Some(screen.course_selected));
        frame.render_stateful_widget(courses, panes[0], &mut course_state);

        let Some(course) = screen.current_course(student) else {
            return;
        };
        let grades_block = pane_block(
            format!("Grades: {}", course.name),
            screen.focus == Pane::Grades,
        );
        if course.grades.is_empty() {
            let message = Paragraph::new("No grades recorded.")
                .alignment(Alignment::Center)
                .block(grades_block);
            frame.render_widget(message, panes[1]);
            return;
        }

        let grade_items: Vec<ListItem> = course
            .grades
            .iter()
            .enumerate()
            .map(|(idx, grade)| ListItem::new(format!("{:>3}. {grade}", idx + 1)))
            .collect();
        let grades = List::new(grade_items)
            .block(grades_block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");
        let mut grade_state = ListState::default();
        if screen.focus == Pane::Grades {
            grade_state.select(Some(screen.grade_selected));
        }
        frame.render_stateful_widget(grades, panes[1], &mut grade_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let keys: &[(&str, &str)] = match (&self.screen, &self.mode) {
            (_, Mode::Normal) => match &self.screen {
                Screen::Students => &[
                    ("[↑↓]", " Select   "),
                    ("[Enter]", " Open   "),
                    ("[+]", " Add   "),
                    ("[e]", " Rename   "),
                    ("[-]", " Delete   "),
                    ("[f]", " Find   "),
                    ("[x]", " Export   "),
                    ("[q]", " Quit"),
                ],
                Screen::Student(_) => &[
                    ("[↑↓]", " Select   "),
                    ("[Tab]", " Switch Pane   "),
                    ("[+]", " Add Grade   "),
                    ("[e]", " Edit Grade   "),
                    ("[-]", " Delete   "),
                    ("[r]", " Rename   "),
                    ("[x]", " Export   "),
                    ("[Esc]", " Back   "),
                    ("[q]", " Quit"),
                ],
            },
            (_, Mode::ConfirmStudentDelete(_))
            | (_, Mode::ConfirmCourseDelete(_))
            | (_, Mode::ConfirmGradeDelete(_)) => &[("[y]", " Confirm   "), ("[n/Esc]", " Cancel")],
            _ => &[
                ("[Enter]", " Save   "),
                ("[Tab]", " Accept/Switch   "),
                ("[Esc]", " Cancel"),
            ],
        };

        let spans: Vec<Span<'static>> = keys
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(key.to_string(), key_style),
                    Span::raw(label.to_string()),
                ]
            })
            .collect();
        Line::from(spans)
    }

    fn draw_name_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &NameForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line("Name"), Line::from("")];
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = "Name: ".len() as u16;
        frame.set_cursor_position((inner.x + prefix + form.value_len() as u16, inner.y));
    }

    fn draw_grade_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &GradeForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let course_line = form.build_line("Course", GradeField::Course);
        let grade_line = form.build_line("Grade", GradeField::Grade);
        let mut lines = vec![course_line, grade_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to accept/switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            GradeField::Course => (
                inner.x + "Course: ".len() as u16 + form.value_len(GradeField::Course) as u16,
                inner.y,
            ),
            GradeField::Grade => (
                inner.x + "Grade: ".len() as u16 + form.value_len(GradeField::Grade) as u16,
                inner.y + 1,
            ),
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm(&self, frame: &mut Frame, area: Rect, title: &str, mut lines: Vec<Line>) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Y to confirm or N / Esc to cancel.",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Shared keystroke handling for the single-field name dialogs.
fn edit_name_form(code: KeyCode, form: &mut NameForm) -> FormKey {
    match code {
        KeyCode::Esc => FormKey::Cancel,
        KeyCode::Enter => FormKey::Submit,
        KeyCode::Backspace => {
            form.backspace();
            FormKey::Other
        }
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.error = None;
            }
            FormKey::Other
        }
        _ => FormKey::Other,
    }
}
