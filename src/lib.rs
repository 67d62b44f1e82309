//! Core library surface for the grade roster.
//!
//! The roster itself is plain in-memory data with no I/O. The remaining
//! modules are the shells around it: input validation, two interchangeable
//! front ends, the report export sink, configuration, and logging.
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod roster;
pub mod ui;

/// The roster and its error type, used by every front end.
pub use error::{Result, RosterError};
pub use roster::Roster;

/// Domain types handed out by roster operations.
pub use models::{letter_grade, Course, CourseSummary, LetterGrade, ReportRow, Student, StudentId};

/// Front ends and the export sink.
pub use config::Config;
pub use console::Console;
pub use export::export_to_file;
pub use ui::{run_app, App};
