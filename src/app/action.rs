use crate::app::state::Platform;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StartDownload { url: String, path: PathBuf, platform: Platform },
    RecordOutcome { url: String, path: PathBuf, platform: Platform, error: Option<String> },
    SaveConfig,
    Quit,
}
