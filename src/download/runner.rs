//! Running yt-dlp as a child process.
//!
//! stdout is scanned for progress lines, which are forwarded to the UI as
//! [`AppEvent::DownloadProgress`]. The tail of stderr is kept so a failed run
//! can be explained to the user.

use crate::app::event::AppEvent;
use crate::download::error::DownloadError;
use crate::download::options::DownloadOptions;
use crate::download::progress::parse_progress_line;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const STDERR_TAIL_LINES: usize = 50;

/// Handle on the yt-dlp executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Arguments placed before the download options, e.g. `-m yt_dlp` when
    /// the program is a Python interpreter.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Download `url` to `options.output_template`, reporting progress on
    /// `events`. Resolves once yt-dlp has exited.
    pub async fn download(
        &self,
        url: &str,
        options: &DownloadOptions,
        events: &mpsc::UnboundedSender<AppEvent>,
    ) -> Result<(), DownloadError> {
        if let Some(parent) = options.output_template.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tracing::info!(
            url,
            output = %options.output_template.display(),
            format = %options.format,
            "starting yt-dlp"
        );

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(options.to_args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DownloadError::Unexpected(format!(
                    "could not start {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DownloadError::Unexpected("yt-dlp stdout unavailable".into()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| DownloadError::Unexpected("yt-dlp stderr unavailable".into()))?;
        let stderr_task = tokio::spawn(collect_tail(stderr));

        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        while let Some(line) = next_lossy_line(&mut reader, &mut buf).await? {
            match parse_progress_line(&line) {
                Some(update) => {
                    let _ = events.send(AppEvent::DownloadProgress(update));
                }
                None => tracing::debug!("yt-dlp: {}", line),
            }
        }

        let status = child.wait().await?;
        let stderr_tail = stderr_task.await.unwrap_or_default();

        if status.success() {
            tracing::info!(url, "yt-dlp finished");
            return Ok(());
        }

        let message = failure_message(&stderr_tail)
            .unwrap_or_else(|| format!("yt-dlp exited with {}", status));
        tracing::warn!(url, %status, "yt-dlp failed: {}", message);
        Err(DownloadError::Failed(message))
    }
}

/// Spawn a download task. Exactly one of `DownloadFinished` or
/// `DownloadFailed` is sent when it ends. Aborting the handle kills yt-dlp.
pub fn spawn_download(
    ytdlp: YtDlp,
    url: String,
    options: DownloadOptions,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = match ytdlp.download(&url, &options, &event_tx).await {
            Ok(()) => AppEvent::DownloadFinished {
                path: options.output_template,
            },
            Err(e) => AppEvent::DownloadFailed(e),
        };
        let _ = event_tx.send(event);
    })
}

async fn collect_tail<R: AsyncRead + Unpin>(reader: R) -> Vec<String> {
    let mut tail = VecDeque::with_capacity(STDERR_TAIL_LINES);
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    while let Ok(Some(line)) = next_lossy_line(&mut reader, &mut buf).await {
        tracing::debug!("yt-dlp stderr: {}", line);
        if tail.len() == STDERR_TAIL_LINES {
            tail.pop_front();
        }
        tail.push_back(line);
    }
    tail.into()
}

/// Read one line, decoding invalid UTF-8 lossily. yt-dlp echoes file names
/// in the platform encoding, which is not UTF-8 everywhere.
async fn next_lossy_line<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Pick the line that best explains a failed run: the last `ERROR:` line,
/// else the last non-blank line.
fn failure_message(stderr: &[String]) -> Option<String> {
    stderr
        .iter()
        .rev()
        .find_map(|l| l.trim().strip_prefix("ERROR:").map(|m| m.trim().to_string()))
        .filter(|m| !m.is_empty())
        .or_else(|| {
            stderr
                .iter()
                .rev()
                .map(|l| l.trim())
                .find(|l| !l.is_empty())
                .map(str::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::progress::ProgressStatus;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_failure_message_prefers_error_line() {
        let stderr = lines(&[
            "WARNING: [youtube] falling back to generic extractor",
            "ERROR: [youtube] abc123: Video unavailable",
            "",
        ]);
        assert_eq!(
            failure_message(&stderr).as_deref(),
            Some("[youtube] abc123: Video unavailable")
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_last_line() {
        let stderr = lines(&["something odd happened", "   "]);
        assert_eq!(
            failure_message(&stderr).as_deref(),
            Some("something odd happened")
        );
        assert_eq!(failure_message(&[]), None);
    }

    #[cfg(unix)]
    mod process {
        use super::*;
        use std::path::{Path, PathBuf};

        fn fake_ytdlp(dir: &Path, body: &str) -> YtDlp {
            let script = dir.join("fake-yt-dlp.sh");
            std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
            YtDlp::new("sh").with_leading_args([script])
        }

        fn options(output: PathBuf) -> DownloadOptions {
            DownloadOptions {
                format: "best".into(),
                output_template: output,
                no_playlist: true,
            }
        }

        fn drain(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
            let mut out = Vec::new();
            while let Ok(ev) = rx.try_recv() {
                out.push(ev);
            }
            out
        }

        #[tokio::test]
        async fn test_download_reports_progress() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(
                tmp.path(),
                r#"echo '[youtube] abc: Downloading webpage'
echo 'vidgrab-progress:{"status":"downloading","downloaded_bytes":50,"total_bytes":200}'
echo 'vidgrab-progress:{"status":"downloading","downloaded_bytes":200,"total_bytes":200}'
echo 'vidgrab-progress:{"status":"finished","downloaded_bytes":200,"total_bytes":200}'
: > "$4""#,
            );
            let output = tmp.path().join("nested").join("clip.mp4");
            let (tx, mut rx) = mpsc::unbounded_channel();

            ytdlp
                .download("https://youtu.be/abc", &options(output.clone()), &tx)
                .await
                .unwrap();

            assert!(output.exists());
            let percents: Vec<Option<u16>> = drain(&mut rx)
                .into_iter()
                .map(|ev| match ev {
                    AppEvent::DownloadProgress(u) => u.percent(),
                    other => panic!("unexpected event {:?}", other),
                })
                .collect();
            assert_eq!(percents, vec![Some(25), Some(100), None]);
        }

        #[tokio::test]
        async fn test_non_utf8_output_does_not_fail_download() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(
                tmp.path(),
                r#"printf '[download] Destination: Jos\351.mp4\r\n'
printf 'WARNING: caf\351 \n' >&2
echo 'vidgrab-progress:{"status":"downloading","downloaded_bytes":1,"total_bytes":2}'
: > "$4""#,
            );
            let output = tmp.path().join("clip.mp4");
            let (tx, mut rx) = mpsc::unbounded_channel();

            ytdlp
                .download("https://youtu.be/abc", &options(output.clone()), &tx)
                .await
                .unwrap();

            assert!(output.exists());
            let events = drain(&mut rx);
            assert!(matches!(
                &events[..],
                [AppEvent::DownloadProgress(u)] if u.percent() == Some(50)
            ));
        }

        #[tokio::test]
        async fn test_non_utf8_stderr_keeps_error_line() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(
                tmp.path(),
                "printf 'WARNING: Jos\\351.mp4\\n' >&2\necho 'ERROR: Video unavailable' >&2\nexit 1",
            );
            let (tx, _rx) = mpsc::unbounded_channel();
            let err = ytdlp
                .download("https://youtu.be/x", &options(tmp.path().join("o.mp4")), &tx)
                .await
                .unwrap_err();
            assert_eq!(err, DownloadError::Failed("Video unavailable".into()));
        }

        #[tokio::test]
        async fn test_lossy_line_reader() {
            let data: &[u8] = b"caf\xe9\r\nplain\nlast";
            let mut reader = BufReader::new(data);
            let mut buf = Vec::new();
            assert_eq!(
                next_lossy_line(&mut reader, &mut buf).await.unwrap().as_deref(),
                Some("caf\u{FFFD}")
            );
            assert_eq!(
                next_lossy_line(&mut reader, &mut buf).await.unwrap().as_deref(),
                Some("plain")
            );
            assert_eq!(
                next_lossy_line(&mut reader, &mut buf).await.unwrap().as_deref(),
                Some("last")
            );
            assert_eq!(next_lossy_line(&mut reader, &mut buf).await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_download_failure_uses_error_line() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(
                tmp.path(),
                "echo 'ERROR: Unsupported URL: https://example.com/' >&2\nexit 1",
            );
            let (tx, _rx) = mpsc::unbounded_channel();
            let err = ytdlp
                .download(
                    "https://example.com/",
                    &options(tmp.path().join("out.mp4")),
                    &tx,
                )
                .await
                .unwrap_err();
            assert_eq!(
                err,
                DownloadError::Failed("Unsupported URL: https://example.com/".into())
            );
        }

        #[tokio::test]
        async fn test_download_failure_without_stderr() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(tmp.path(), "exit 2");
            let (tx, _rx) = mpsc::unbounded_channel();
            let err = ytdlp
                .download("https://youtu.be/x", &options(tmp.path().join("o.mp4")), &tx)
                .await
                .unwrap_err();
            match err {
                DownloadError::Failed(msg) => assert!(msg.starts_with("yt-dlp exited with")),
                other => panic!("expected Failed, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn test_missing_program_is_unexpected() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = YtDlp::new(tmp.path().join("no-such-yt-dlp"));
            let (tx, _rx) = mpsc::unbounded_channel();
            let err = ytdlp
                .download("https://youtu.be/x", &options(tmp.path().join("o.mp4")), &tx)
                .await
                .unwrap_err();
            assert!(matches!(err, DownloadError::Unexpected(_)));
            assert_eq!(err.dialog_title(), "Error");
        }

        #[tokio::test]
        async fn test_spawn_download_sends_outcome() {
            let tmp = tempfile::tempdir().unwrap();
            let ytdlp = fake_ytdlp(
                tmp.path(),
                r#"echo 'vidgrab-progress:{"status":"finished"}'"#,
            );
            let output = tmp.path().join("done.mp4");
            let (tx, mut rx) = mpsc::unbounded_channel();

            spawn_download(ytdlp, "https://youtu.be/x".into(), options(output.clone()), tx)
                .await
                .unwrap();

            let events = drain(&mut rx);
            assert!(matches!(
                &events[0],
                AppEvent::DownloadProgress(u) if u.status == ProgressStatus::Finished
            ));
            assert!(matches!(
                &events[1],
                AppEvent::DownloadFinished { path } if *path == output
            ));
        }
    }
}
