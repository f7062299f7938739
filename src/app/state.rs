use crate::app::action::Action;
use crate::config::AppConfig;
use crate::download::path::{default_save_path, resolve_save_path};
use crate::download::{DownloadError, ProgressUpdate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;
use url::Url;

/// Video platform shown in the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    YouTube,
    Instagram,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::Instagram, Platform::Facebook];

    pub fn name(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Platform::YouTube => Platform::Instagram,
            Platform::Instagram => Platform::Facebook,
            Platform::Facebook => Platform::YouTube,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Platform::YouTube => Platform::Facebook,
            Platform::Instagram => Platform::YouTube,
            Platform::Facebook => Platform::Instagram,
        }
    }

    /// Recognize the platform from a link's host name.
    pub fn detect(url: &str) -> Option<Self> {
        let host = link_host(url)?;
        let host = host
            .strip_prefix("www.")
            .or_else(|| host.strip_prefix("m."))
            .unwrap_or(host.as_str());
        let matches = |domain: &str| host == domain || host.ends_with(&format!(".{}", domain));

        if matches("youtube.com") || matches("youtu.be") || matches("youtube-nocookie.com") {
            Some(Platform::YouTube)
        } else if matches("instagram.com") || matches("instagr.am") {
            Some(Platform::Instagram)
        } else if matches("facebook.com") || matches("fb.watch") || matches("fb.com") {
            Some(Platform::Facebook)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercased host of a pasted link. Links are often copied without a
/// scheme (`youtu.be/abc`), so those are retried as `https://`.
fn link_host(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    let parsed = Url::parse(link)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{}", link)).ok())?;
    parsed.host_str().map(str::to_ascii_lowercase)
}

#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        // Pasted links sometimes carry a trailing newline
        let clean: String = s.chars().filter(|c| !c.is_control()).collect();
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing separators, then the word itself
        while pos > 0 && is_word_separator(self.text.as_bytes()[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_word_separator(self.text.as_bytes()[pos - 1]) {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

// Slashes count as separators so Ctrl+W trims one path or URL segment
fn is_word_separator(b: u8) -> bool {
    b == b' ' || b == b'/'
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Platform,
    Link,
    DownloadButton,
}

/// The "Save Video As" prompt.
#[derive(Debug, Default)]
pub struct SaveDialog {
    pub visible: bool,
    pub input: InputState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogKind {
    Info,
    Error,
}

/// Blocking message box; captures all input until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDialog {
    pub kind: DialogKind,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DownloadPhase {
    Idle,
    Running,
    Completed,
    Failed,
}

/// The download currently (or most recently) started.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDownload {
    pub url: String,
    pub path: PathBuf,
    pub platform: Platform,
}

pub struct AppState {
    pub config: AppConfig,
    pub platform: Platform,
    pub link: InputState,
    pub focus: FocusPanel,
    pub save_dialog: SaveDialog,
    pub message: Option<MessageDialog>,
    pub progress: u16,
    pub phase: DownloadPhase,
    pub current: Option<ActiveDownload>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let platform = config.ui.default_platform;
        Self {
            config,
            platform,
            link: InputState::new(),
            focus: FocusPanel::Link,
            save_dialog: SaveDialog::default(),
            message: None,
            progress: 0,
            phase: DownloadPhase::Idle,
            current: None,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.phase == DownloadPhase::Running
    }

    /// Download button pressed: check the link, then ask where to save.
    pub fn start_download(&mut self) {
        if self.is_downloading() {
            self.show_error("Error", "A download is already in progress.");
            return;
        }
        if self.link.text.trim().is_empty() {
            self.show_error("Error", "No video link provided!");
            return;
        }

        let download = &self.config.download;
        let suggested = default_save_path(&download.default_dir, &download.default_file_name);
        self.save_dialog.input.set_text(suggested.to_string_lossy());
        self.save_dialog.visible = true;
        self.dirty = true;
    }

    /// Save dialog accepted. Produces the action that launches yt-dlp.
    pub fn confirm_save(&mut self) -> Option<Action> {
        self.save_dialog.visible = false;
        self.dirty = true;

        let Some(path) =
            resolve_save_path(&self.save_dialog.input.text, &self.config.download.default_dir)
        else {
            self.show_error("Error", "No save location selected!");
            return None;
        };

        let url = self.link.text.trim().to_string();
        self.progress = 0;
        self.phase = DownloadPhase::Running;
        self.status_message = Some(format!("Downloading to {}", path.display()));
        self.current = Some(ActiveDownload {
            url: url.clone(),
            path: path.clone(),
            platform: self.platform,
        });

        Some(Action::StartDownload {
            url,
            path,
            platform: self.platform,
        })
    }

    /// Save dialog dismissed without a path.
    pub fn cancel_save(&mut self) {
        self.save_dialog.visible = false;
        self.show_error("Error", "No save location selected!");
    }

    pub fn apply_progress(&mut self, update: &ProgressUpdate) {
        if !self.is_downloading() {
            return;
        }
        if let Some(pct) = update.percent() {
            if pct != self.progress {
                self.progress = pct;
                self.dirty = true;
            }
        }
    }

    pub fn finish_download(&mut self, path: PathBuf) -> Vec<Action> {
        self.progress = 100;
        self.phase = DownloadPhase::Completed;
        self.status_message = Some(format!("Saved {}", path.display()));
        self.show_info("Download Success", format!("Video saved at: {}", path.display()));

        let mut actions = Vec::new();
        if let Some(download) = self.current.clone() {
            actions.push(Action::RecordOutcome {
                url: download.url,
                path: path.clone(),
                platform: download.platform,
                error: None,
            });
        }
        if self.remember_directory(&path) {
            actions.push(Action::SaveConfig);
        }
        actions
    }

    pub fn fail_download(&mut self, error: &DownloadError) -> Vec<Action> {
        self.phase = DownloadPhase::Failed;
        self.status_message = Some(error.dialog_title().to_string());
        self.show_error(error.dialog_title(), error.dialog_text());

        match self.current.clone() {
            Some(download) => vec![Action::RecordOutcome {
                url: download.url,
                path: download.path,
                platform: download.platform,
                error: Some(error.to_string()),
            }],
            None => vec![],
        }
    }

    // Next save dialog starts in the directory the last video went to
    fn remember_directory(&mut self, path: &Path) -> bool {
        match path.parent() {
            Some(dir)
                if !dir.as_os_str().is_empty()
                    && dir != self.config.download.default_dir.as_path() =>
            {
                self.config.download.default_dir = dir.to_path_buf();
                true
            }
            _ => false,
        }
    }

    pub fn show_error(&mut self, title: &str, text: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: DialogKind::Error,
            title: title.to_string(),
            text: text.into(),
        });
        self.dirty = true;
    }

    pub fn show_info(&mut self, title: &str, text: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: DialogKind::Info,
            title: title.to_string(),
            text: text.into(),
        });
        self.dirty = true;
    }

    pub fn dismiss_dialog(&mut self) {
        self.message = None;
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Platform => FocusPanel::Link,
            FocusPanel::Link => FocusPanel::DownloadButton,
            FocusPanel::DownloadButton => FocusPanel::Platform,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Platform => FocusPanel::DownloadButton,
            FocusPanel::Link => FocusPanel::Platform,
            FocusPanel::DownloadButton => FocusPanel::Link,
        };
        self.dirty = true;
    }

    pub fn cycle_platform(&mut self, forward: bool) {
        self.platform = if forward {
            self.platform.next()
        } else {
            self.platform.prev()
        };
        self.dirty = true;
    }

    /// Follow the link: select its platform when the host is recognized.
    pub fn on_link_edited(&mut self) {
        if let Some(platform) = Platform::detect(&self.link.text) {
            self.platform = platform;
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.phase {
            DownloadPhase::Idle => "Ready".to_string(),
            DownloadPhase::Running => format!("Downloading... {}%", self.progress),
            DownloadPhase::Completed => "Download complete".to_string(),
            DownloadPhase::Failed => "Download failed".to_string(),
        }
    }
}
