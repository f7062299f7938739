//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::app::state::Platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub download: DownloadConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How yt-dlp is invoked and where videos go by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// yt-dlp executable, looked up on `PATH` when not absolute.
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,
    /// Arguments placed before the download options (e.g. `["-m", "yt_dlp"]`
    /// when `ytdlp_path` is a Python interpreter).
    #[serde(default)]
    pub ytdlp_args: Vec<String>,
    /// yt-dlp format selector.
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_download_dir")]
    pub default_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    #[serde(default = "default_true")]
    pub no_playlist: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: default_ytdlp_path(),
            ytdlp_args: Vec::new(),
            format: default_format(),
            default_dir: default_download_dir(),
            default_file_name: default_file_name(),
            no_playlist: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub default_platform: Platform,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            default_platform: Platform::default(),
        }
    }
}

/// Diagnostic log and download history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `trace`, `debug`, `info`, `warn` or `error`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Append finished and failed downloads to a daily history file.
    #[serde(default = "default_true")]
    pub history: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
            history: true,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_ytdlp_path() -> String {
    "yt-dlp".to_string()
}
fn default_format() -> String {
    "best".to_string()
}
fn default_download_dir() -> PathBuf {
    dirs::video_dir()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
fn default_file_name() -> String {
    "video.mp4".to_string()
}
fn default_tick_rate() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/vidgrab/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
