//! yt-dlp progress output parsing.
//!
//! yt-dlp is started with a `--progress-template` that prints the whole
//! progress-hook dictionary as JSON behind [`PROGRESS_MARKER`], one line per
//! update. Each such line becomes a [`ProgressUpdate`], which maps onto the
//! 0-100 value of the progress bar.

use serde::{Deserialize, Deserializer};

/// Prefix that tags progress lines on yt-dlp's stdout.
pub const PROGRESS_MARKER: &str = "vidgrab-progress:";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Downloading,
    Finished,
    Error,
    #[serde(other)]
    Other,
}

/// One progress-hook invocation, as reported by yt-dlp.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressUpdate {
    pub status: ProgressStatus,
    #[serde(default, deserialize_with = "byte_count")]
    pub downloaded_bytes: Option<u64>,
    #[serde(default, deserialize_with = "byte_count")]
    pub total_bytes: Option<u64>,
    #[serde(default, deserialize_with = "byte_count")]
    pub total_bytes_estimate: Option<u64>,
}

impl ProgressUpdate {
    /// Progress bar value for this update.
    ///
    /// Only `downloading` updates move the bar. An unknown or zero total
    /// yields 0; the estimate is used when the exact size is not known
    /// (fragmented streams).
    pub fn percent(&self) -> Option<u16> {
        if self.status != ProgressStatus::Downloading {
            return None;
        }
        let total = self
            .total_bytes
            .filter(|t| *t > 0)
            .or(self.total_bytes_estimate)
            .unwrap_or(0);
        let downloaded = self.downloaded_bytes.unwrap_or(0);
        Some(ratio_percent(downloaded, total))
    }
}

/// `floor(downloaded / total * 100)`, clamped to 100. A zero total is 0%.
pub fn ratio_percent(downloaded: u64, total: u64) -> u16 {
    if total == 0 {
        return 0;
    }
    let pct = (downloaded as u128 * 100) / total as u128;
    pct.min(100) as u16
}

/// Parse one stdout line. Lines without the marker, or with JSON that does
/// not look like a progress dictionary, are ignored.
pub fn parse_progress_line(line: &str) -> Option<ProgressUpdate> {
    let json = line.trim().strip_prefix(PROGRESS_MARKER)?;
    serde_json::from_str(json.trim()).ok()
}

// yt-dlp reports estimates as floats and unknown sizes as null.
fn byte_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u64))
}
