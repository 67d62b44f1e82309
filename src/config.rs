//! User configuration loaded from a TOML file. Every key is optional; a missing
//! file simply means "use the defaults".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the platform config directory.
const CONFIG_FILE_NAME: &str = "config.toml";
/// Default name of the exported report.
const DEFAULT_REPORT_FILE: &str = "grade_report.txt";
/// Default log file name inside the data directory.
const DEFAULT_LOG_FILE: &str = "grade-roster.log";

/// Where and how the text report is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Target directory. Falls back to the platform data directory.
    pub dir: Option<PathBuf>,
    pub file_name: String,
    /// Hand the written report to the system viewer.
    pub open_after_export: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_REPORT_FILE.to_string(),
            open_after_export: false,
        }
    }
}

/// Log verbosity and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive such as `info` or `grade_roster=debug`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Resolved log file, defaulting into the data directory.
    pub fn log_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join(DEFAULT_LOG_FILE))
    }
}

/// Course names offered as suggestions while typing. Nothing is validated
/// against this list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub courses: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let courses = [
            "Art",
            "Biology",
            "Chemistry",
            "Computer Science",
            "English",
            "Geography",
            "History",
            "Math",
            "Music",
            "Physical Education",
            "Physics",
        ];
        Self {
            courses: courses.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportSettings,
    pub logging: LoggingSettings,
    pub catalog: CatalogSettings,
}

impl Config {
    /// Load from an explicit path, or from the platform config directory when
    /// `path` is `None`. Only an explicit path is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse TOML")
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "grade-roster")
}

/// `<config dir>/config.toml`, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Platform data directory, or the working directory when none exists.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [export]
            dir = "/tmp/reports"

            [catalog]
            courses = ["Latin"]
            "#,
        )
        .unwrap();

        assert_eq!(config.export.dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(config.export.file_name, DEFAULT_REPORT_FILE);
        assert!(!config.export.open_after_export);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.catalog.courses, vec!["Latin".to_string()]);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export\nfile_name = 3").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();

        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = Config::from_toml("[logging]\nfile = \"roster.log\"").unwrap();
        assert_eq!(config.logging.log_file(), PathBuf::from("roster.log"));
    }

    #[test]
    fn log_file_defaults_into_data_dir() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.log_file(), data_dir().join(DEFAULT_LOG_FILE));
    }
}
