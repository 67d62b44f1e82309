//! Ratatui front end: a students list, a per-student drill-down, and modal
//! dialogs for every edit. All state changes go through the roster.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
