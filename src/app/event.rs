use crate::download::{DownloadError, ProgressUpdate};
use crossterm::event::Event as CrosstermEvent;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Progress hook fired by the running download
    DownloadProgress(ProgressUpdate),
    /// yt-dlp exited successfully
    DownloadFinished {
        path: PathBuf,
    },
    DownloadFailed(DownloadError),

    /// Tick for UI refresh
    Tick,
}
