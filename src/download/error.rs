use thiserror::Error;

/// Why a download attempt ended without a saved file.
///
/// Both variants are terminal for the attempt; the user retries by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// yt-dlp ran and reported a failure (network error, removed video,
    /// unsupported URL, ...).
    #[error("{0}")]
    Failed(String),
    /// Anything else: yt-dlp missing, pipe or filesystem errors.
    #[error("{0}")]
    Unexpected(String),
}

impl DownloadError {
    pub fn dialog_title(&self) -> &'static str {
        match self {
            DownloadError::Failed(_) => "Download Failed",
            DownloadError::Unexpected(_) => "Error",
        }
    }

    pub fn dialog_text(&self) -> String {
        match self {
            DownloadError::Failed(msg) => format!("Failed to download video: {}", msg),
            DownloadError::Unexpected(msg) => format!("An unexpected error occurred: {}", msg),
        }
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        DownloadError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_titles() {
        let failed = DownloadError::Failed("Video unavailable".into());
        assert_eq!(failed.dialog_title(), "Download Failed");
        assert_eq!(
            failed.dialog_text(),
            "Failed to download video: Video unavailable"
        );

        let other = DownloadError::Unexpected("No such file or directory".into());
        assert_eq!(other.dialog_title(), "Error");
        assert_eq!(
            other.dialog_text(),
            "An unexpected error occurred: No such file or directory"
        );
    }

    #[test]
    fn test_io_errors_are_unexpected() {
        let err: DownloadError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "yt-dlp not found").into();
        assert!(matches!(err, DownloadError::Unexpected(_)));
    }
}
