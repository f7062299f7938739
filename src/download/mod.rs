//! Video download subsystem.
//!
//! All extraction work is delegated to yt-dlp, which runs as a child process.
//! This module builds its command line, turns its progress output into
//! [`progress::ProgressUpdate`] values, and classifies its failures.

pub mod error;
pub mod options;
pub mod path;
pub mod progress;
pub mod runner;

pub use error::DownloadError;
pub use options::DownloadOptions;
pub use progress::{ProgressStatus, ProgressUpdate};
pub use runner::YtDlp;
