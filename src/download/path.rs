//! Save-location handling for the "Save Video As" dialog.
//!
//! - **Default path**: the dialog is pre-filled with the configured directory
//!   and a sanitized file name.
//! - **Resolution**: `~` is expanded, relative paths land in the default
//!   directory, and a missing extension becomes `.mp4`.

use std::path::{Path, PathBuf};

/// Extension of the dialog's default "MP4 files" filter.
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Strip path components, control characters and leading dots from a file
/// name so it can only ever name a file inside the chosen directory.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    // Backslash is a valid char on Unix, so split on it by hand
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let sanitized: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != ':')
        .collect();
    let sanitized = sanitized.trim().trim_start_matches('.');

    if sanitized.is_empty() {
        return None;
    }

    // Limit to 255 bytes without splitting a char
    let mut end = sanitized.len().min(255);
    while !sanitized.is_char_boundary(end) {
        end -= 1;
    }
    Some(sanitized[..end].to_string())
}

/// Text the save dialog starts with.
pub fn default_save_path(dir: &Path, file_name: &str) -> PathBuf {
    let name = sanitize_filename(file_name)
        .unwrap_or_else(|| format!("video.{}", DEFAULT_EXTENSION));
    dir.join(name)
}

/// Turn the dialog's text into the output path. Returns `None` when no
/// location was given.
pub fn resolve_save_path(input: &str, default_dir: &Path) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let expanded = expand_home(input);
    let mut path = if expanded.is_absolute() {
        expanded
    } else {
        default_dir.join(expanded)
    };

    // A bare directory is not a file name
    if input.ends_with('/') || input.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return None;
    }

    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    Some(path)
}

fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("clip.mp4"), Some("clip.mp4".into()));
        assert_eq!(sanitize_filename("../../../etc/passwd"), Some("passwd".into()));
        assert_eq!(
            sanitize_filename("..\\..\\windows\\system32"),
            Some("system32".into())
        );
        assert_eq!(sanitize_filename(".hidden.mp4"), Some("hidden.mp4".into()));
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("my video.mp4"), Some("my video.mp4".into()));
    }

    #[test]
    fn test_default_save_path() {
        let dir = Path::new("/home/user/Videos");
        assert_eq!(
            default_save_path(dir, "video.mp4"),
            PathBuf::from("/home/user/Videos/video.mp4")
        );
        assert_eq!(
            default_save_path(dir, "../.."),
            PathBuf::from("/home/user/Videos/video.mp4")
        );
    }

    #[test]
    fn test_resolve_empty_is_none() {
        let dir = Path::new("/srv/downloads");
        assert_eq!(resolve_save_path("", dir), None);
        assert_eq!(resolve_save_path("   ", dir), None);
    }

    #[test]
    fn test_resolve_relative_and_extension() {
        let dir = Path::new("/srv/downloads");
        assert_eq!(
            resolve_save_path("clip.mp4", dir),
            Some(PathBuf::from("/srv/downloads/clip.mp4"))
        );
        assert_eq!(
            resolve_save_path("clip", dir),
            Some(PathBuf::from("/srv/downloads/clip.mp4"))
        );
        assert_eq!(
            resolve_save_path("nested/clip.webm", dir),
            Some(PathBuf::from("/srv/downloads/nested/clip.webm"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_absolute() {
        let dir = Path::new("/srv/downloads");
        assert_eq!(
            resolve_save_path(" /tmp/out.mkv ", dir),
            Some(PathBuf::from("/tmp/out.mkv"))
        );
    }

    #[test]
    fn test_resolve_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                resolve_save_path("~/Videos/clip.mp4", Path::new("/unused")),
                Some(home.join("Videos/clip.mp4"))
            );
        }
    }

    #[test]
    fn test_resolve_directory_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        assert_eq!(resolve_save_path(dir.to_str().unwrap(), dir), None);
        assert_eq!(resolve_save_path("sub/", dir), None);
    }
}
