//! yt-dlp invocation options.

use crate::config::DownloadConfig;
use crate::download::progress::PROGRESS_MARKER;
use std::ffi::OsString;
use std::path::PathBuf;

/// The option set handed to yt-dlp for one download: format selector,
/// output path, and the progress template that feeds the progress hook.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOptions {
    pub format: String,
    pub output_template: PathBuf,
    pub no_playlist: bool,
}

impl DownloadOptions {
    pub fn new(config: &DownloadConfig, output: PathBuf) -> Self {
        Self {
            format: config.format.clone(),
            output_template: output,
            no_playlist: config.no_playlist,
        }
    }

    /// Render the command-line arguments for downloading `url`.
    ///
    /// `%` in the output path is escaped so yt-dlp saves to exactly the
    /// path the user chose instead of expanding it as a template.
    pub fn to_args(&self, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            self.format.clone().into(),
            "-o".into(),
            escape_template(&self.output_template),
            "--newline".into(),
            "--no-colors".into(),
            "--progress-template".into(),
            format!("download:{}%(progress)j", PROGRESS_MARKER).into(),
        ];
        if self.no_playlist {
            args.push("--no-playlist".into());
        }
        args.push("--".into());
        args.push(url.into());
        args
    }
}

fn escape_template(path: &std::path::Path) -> OsString {
    match path.to_str() {
        Some(s) => s.replace('%', "%%").into(),
        None => path.as_os_str().to_os_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> DownloadOptions {
        DownloadOptions {
            format: "best".into(),
            output_template: PathBuf::from("/tmp/videos/clip.mp4"),
            no_playlist: true,
        }
    }

    #[test]
    fn test_to_args() {
        let args = options().to_args("https://youtu.be/dQw4w9WgXcQ");
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect();
        assert_eq!(
            args,
            vec![
                "-f",
                "best",
                "-o",
                "/tmp/videos/clip.mp4",
                "--newline",
                "--no-colors",
                "--progress-template",
                "download:vidgrab-progress:%(progress)j",
                "--no-playlist",
                "--",
                "https://youtu.be/dQw4w9WgXcQ",
            ]
        );
    }

    #[test]
    fn test_url_after_separator() {
        let args = DownloadOptions {
            no_playlist: false,
            ..options()
        }
        .to_args("-leading-dash");
        let n = args.len();
        assert_eq!(args[n - 2], "--");
        assert_eq!(args[n - 1], "-leading-dash");
        assert!(!args.iter().any(|a| a == "--no-playlist"));
    }

    #[test]
    fn test_percent_in_path_is_escaped() {
        let opts = DownloadOptions {
            output_template: PathBuf::from("/tmp/100%(title)s.mp4"),
            ..options()
        };
        let args = opts.to_args("https://example.com/v");
        assert_eq!(args[3], "/tmp/100%%(title)s.mp4");
    }
}
