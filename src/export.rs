//! Writes the roster's text report to disk. Building the text is the roster's
//! job; this module only decides where it goes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use open::that as open_path;
use tracing::{info, warn};

use crate::config::{data_dir, ExportSettings};
use crate::roster::Roster;

/// Resolve the report path for the given settings without touching disk.
pub fn report_path(settings: &ExportSettings) -> PathBuf {
    let dir = settings.dir.clone().unwrap_or_else(data_dir);
    dir.join(&settings.file_name)
}

/// Write `roster.export_report()` to the configured file, replacing any
/// previous report, and return the path written.
pub fn export_to_file(roster: &Roster, settings: &ExportSettings) -> Result<PathBuf> {
    let path = report_path(settings);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create export directory")?;
        }
    }

    fs::write(&path, roster.export_report())
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    info!(path = %path.display(), students = roster.len(), "report exported");

    if settings.open_after_export {
        if let Err(err) = open_path(&path) {
            warn!(path = %path.display(), error = %err, "could not open exported report");
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &std::path::Path) -> ExportSettings {
        ExportSettings {
            dir: Some(dir.join("reports")),
            file_name: "class.txt".to_string(),
            open_after_export: false,
        }
    }

    #[test]
    fn writes_report_into_configured_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut roster = Roster::new();
        let id = roster.add_student("Ana");
        roster.add_grade(id, "Math", 92).unwrap();

        let path = export_to_file(&roster, &settings_in(tmp.path())).unwrap();

        assert_eq!(path, tmp.path().join("reports").join("class.txt"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, roster.export_report());
        assert!(written.contains("Math: 92 | Average: 92.00 (A)"));
    }

    #[test]
    fn export_overwrites_previous_report() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings_in(tmp.path());
        let mut roster = Roster::new();
        roster.add_student("Ana");
        export_to_file(&roster, &settings).unwrap();

        roster.add_student("Ben");
        let path = export_to_file(&roster, &settings).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("Student: Ben"));
        assert_eq!(written.matches("Student: Ana").count(), 1);
    }
}
