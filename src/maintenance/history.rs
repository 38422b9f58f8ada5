use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TrimOutcome;

/// Marker a line must contain to end the kept part of the history
pub const SENTINEL: &str = "###";

/// History written when `~/.bash_history` does not exist yet
pub const DEFAULT_HISTORY: [&str; 10] = [
    "sdk update",
    "sdk upgrade",
    "rustup update",
    "rustup upgrade",
    "hisclear",
    "flatpak update",
    "sudo dnf upgrade",
    "sudo dnf autoremove",
    "sudo dnf update",
    SENTINEL,
];

/// Trim the history file at `path` after its first sentinel line
///
/// If the file exists, every line after the first one containing
/// [`SENTINEL`] is dropped. Lines are handled as raw bytes, so kept lines
/// are written back exactly as read, including any bytes that are not valid
/// UTF-8 and any `\r` before the newline. A file without a sentinel is left
/// byte-for-byte unchanged. A missing file is created with [`DEFAULT_HISTORY`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or written. Nothing is
/// rolled back: a failed rewrite may leave a partially written file.
pub fn trim_history(path: &Path) -> Result<TrimOutcome> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            write_default_history(path)?;
            tracing::debug!("seeded {} with {} lines", path.display(), DEFAULT_HISTORY.len());
            return Ok(TrimOutcome::Created);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read history file: {}", path.display()));
        }
    };

    let lines = split_lines(&content);
    let Some(index) = find_sentinel(&lines) else {
        tracing::debug!("no sentinel in {} ({} lines)", path.display(), lines.len());
        return Ok(TrimOutcome::SentinelNotFound);
    };

    let kept = index + 1;
    let mut trimmed = lines[..kept].concat();
    if trimmed.last() != Some(&b'\n') {
        trimmed.push(b'\n');
    }
    write_history(path, &trimmed)?;
    tracing::debug!("kept {} lines of {}, dropped {}", kept, path.display(), lines.len() - kept);
    Ok(TrimOutcome::Trimmed { kept, removed: lines.len() - kept })
}

/// Index of the first line containing [`SENTINEL`]
pub fn find_sentinel<S: AsRef<[u8]>>(lines: &[S]) -> Option<usize> {
    let sentinel = SENTINEL.as_bytes();
    lines
        .iter()
        .position(|line| line.as_ref().windows(sentinel.len()).any(|w| w == sentinel))
}

/// Split into lines that keep their terminating `\n`
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|&b| b == b'\n').collect()
}

fn write_default_history(path: &Path) -> Result<()> {
    let content: String = DEFAULT_HISTORY.iter().map(|line| format!("{}\n", line)).collect();
    write_history(path, content.as_bytes())
}

fn write_history(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write history file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_in(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(".bash_history");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_trim_keeps_up_to_sentinel() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "a\nb\n###\nc\n");

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::Trimmed { kept: 3, removed: 1 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n###\n");
    }

    #[test]
    fn test_trim_only_first_sentinel_counts() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "ls\n### keep\npwd\n###\nrm -rf build\n");

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::Trimmed { kept: 2, removed: 3 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "ls\n### keep\n");
    }

    #[test]
    fn test_sentinel_as_substring() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "echo 1\necho '####'\necho 2\n");

        trim_history(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "echo 1\necho '####'\n");
    }

    #[test]
    fn test_sentinel_on_last_line_removes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "a\n###");

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::Trimmed { kept: 2, removed: 0 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n###\n");
    }

    #[test]
    fn test_no_sentinel_leaves_bytes_untouched() {
        let original = "ls -la\r\ncd /tmp\nno trailing newline";
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, original);

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::SentinelNotFound);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_empty_file_has_no_sentinel() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "");

        assert_eq!(trim_history(&path).unwrap(), TrimOutcome::SentinelNotFound);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_crlf_line_endings_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = history_in(&dir, "a\r\n###\r\nb\r\n");

        trim_history(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\r\n###\r\n");
    }

    #[test]
    fn test_missing_file_created_with_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".bash_history");

        assert_eq!(trim_history(&path).unwrap(), TrimOutcome::Created);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, DEFAULT_HISTORY);
        assert_eq!(lines.last(), Some(&"###"));
    }

    #[test]
    fn test_created_file_is_stable_on_second_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".bash_history");

        trim_history(&path).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::Trimmed { kept: 10, removed: 0 });
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_missing_parent_directory_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join(".bash_history");

        let err = trim_history(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write history file"));
    }

    #[test]
    fn test_history_path_is_directory_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".bash_history");
        fs::create_dir(&path).unwrap();

        let err = trim_history(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read history file"));
    }

    #[test]
    fn test_invalid_utf8_lines_trimmed_and_preserved() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".bash_history");
        fs::write(&path, b"echo caf\xe9\n\xff\xfe\n###\nrm -rf build\n").unwrap();

        let outcome = trim_history(&path).unwrap();
        assert_eq!(outcome, TrimOutcome::Trimmed { kept: 3, removed: 1 });
        assert_eq!(fs::read(&path).unwrap(), b"echo caf\xe9\n\xff\xfe\n###\n");
    }

    #[test]
    fn test_invalid_utf8_without_sentinel_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".bash_history");
        fs::write(&path, b"ls \xff\nno newline \xfe").unwrap();

        assert_eq!(trim_history(&path).unwrap(), TrimOutcome::SentinelNotFound);
        assert_eq!(fs::read(&path).unwrap(), b"ls \xff\nno newline \xfe");
    }

    #[test]
    fn test_find_sentinel() {
        assert_eq!(find_sentinel(&["a", "b", "###", "c"]), Some(2));
        assert_eq!(find_sentinel(&["a", "b"]), None);
        assert_eq!(find_sentinel::<&str>(&[]), None);
        assert_eq!(find_sentinel(&[&b"\xff##"[..], &b"x ###\r\n"[..]]), Some(1));
    }
}
