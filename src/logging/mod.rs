//! Diagnostic logging and download history.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to
//! `<log_dir>/vidgrab.log` when logging is enabled and nowhere otherwise.
//! Finished and failed downloads are additionally appended to daily history
//! files named `downloads_<date>.log`.

use crate::app::state::Platform;
use crate::config::{expand_tilde, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the global `tracing` subscriber. No-op when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_tilde(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("vidgrab.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(&config.level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
    Ok(())
}

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// How a download attempt ended, for the history file.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    Saved,
    Failed(&'a str),
}

/// Appends one line per download attempt to a daily history file.
///
/// The file handle is cached until the date rolls over.
pub struct DownloadHistory {
    enabled: bool,
    log_dir: PathBuf,
    current: Option<(String, fs::File)>,
}

impl DownloadHistory {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled && config.history,
            log_dir: expand_tilde(&config.log_dir),
            current: None,
        }
    }

    pub fn record(&mut self, platform: Platform, url: &str, path: &Path, outcome: Outcome<'_>) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let line = match outcome {
            Outcome::Saved => format!(
                "[{}] OK     {} {} -> {}",
                now.format("%H:%M:%S"),
                platform,
                url,
                path.display()
            ),
            Outcome::Failed(reason) => format!(
                "[{}] FAILED {} {} -> {} ({})",
                now.format("%H:%M:%S"),
                platform,
                url,
                path.display(),
                reason
            ),
        };

        let filename = format!("downloads_{}.log", now.format("%Y-%m-%d"));
        if let Err(e) = self.write_line(&filename, &line) {
            tracing::warn!("could not write download history: {:#}", e);
        }
    }

    fn write_line(&mut self, filename: &str, line: &str) -> Result<()> {
        let stale = match &self.current {
            Some((name, _)) => name != filename,
            None => true,
        };
        if stale {
            fs::create_dir_all(&self.log_dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.log_dir.join(filename))?;
            self.current = Some((filename.to_string(), file));
        }
        if let Some((_, file)) = self.current.as_mut() {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path, enabled: bool) -> LoggingConfig {
        LoggingConfig {
            enabled,
            log_dir: dir.to_string_lossy().into_owned(),
            level: "debug".into(),
            history: true,
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn test_history_writes_daily_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut history = DownloadHistory::new(&config(tmp.path(), true));
        history.record(
            Platform::YouTube,
            "https://youtu.be/abc",
            Path::new("/tmp/a.mp4"),
            Outcome::Saved,
        );
        history.record(
            Platform::Facebook,
            "https://fb.watch/xyz",
            Path::new("/tmp/b.mp4"),
            Outcome::Failed("Video unavailable"),
        );

        let name = format!("downloads_{}.log", chrono::Local::now().format("%Y-%m-%d"));
        let contents = fs::read_to_string(tmp.path().join(name)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("OK     YouTube https://youtu.be/abc -> /tmp/a.mp4"));
        assert!(lines[1].contains("FAILED Facebook https://fb.watch/xyz"));
        assert!(lines[1].ends_with("(Video unavailable)"));
    }

    #[test]
    fn test_history_disabled_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let logs = tmp.path().join("logs");
        let mut history = DownloadHistory::new(&config(&logs, false));
        history.record(
            Platform::Instagram,
            "https://instagram.com/p/1",
            Path::new("/tmp/c.mp4"),
            Outcome::Saved,
        );
        assert!(!logs.exists());
    }
}
