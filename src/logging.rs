//! File-backed `tracing` setup. The terminal belongs to the front end, so log
//! lines never go to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "GRADE_ROSTER_LOG";

/// Install the global subscriber, appending to the configured log file.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let file = settings.log_file();
    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create log directory")?;
        }
    }
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file)
        .with_context(|| format!("failed to open log file {}", file.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(sink))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("roster.log");

        let settings = LoggingSettings {
            level: "debug".to_string(),
            file: Some(file.clone()),
        };

        init(&settings).unwrap();
        tracing::info!("logging ready");

        assert!(file.exists());
    }
}
