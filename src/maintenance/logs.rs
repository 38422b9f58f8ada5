use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::models::DeleteOutcome;

const LOG_PREFIX: &str = "server-";
const LOG_SUFFIX: &str = ".log";

/// Whether `name` matches the `server-*.log` pattern
///
/// Matching is case-sensitive and the wildcard may be empty.
pub fn is_server_log(name: &str) -> bool {
    name.len() >= LOG_PREFIX.len() + LOG_SUFFIX.len()
        && name.starts_with(LOG_PREFIX)
        && name.ends_with(LOG_SUFFIX)
}

/// Find `server-*.log` entries directly under `home`, sorted by name
///
/// Directories are skipped even if their name matches. Entries whose names
/// are not valid UTF-8 cannot match and are skipped.
///
/// # Errors
///
/// Returns an error if `home` cannot be listed.
pub fn find_server_logs(home: &Path) -> Result<Vec<PathBuf>> {
    let mut logs = Vec::new();

    for entry in WalkDir::new(home).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to read home directory: {}", home.display()))?;

        if entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name().to_str().is_some_and(is_server_log) {
            logs.push(entry.into_path());
        }
    }

    Ok(logs)
}

/// Delete every file in `logs`, each independently
///
/// A failed deletion is recorded in its [`DeleteOutcome`] and does not stop
/// the remaining deletions.
pub fn delete_logs(logs: &[PathBuf]) -> Vec<DeleteOutcome> {
    logs.iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let result = fs::remove_file(path);
            if let Err(e) = &result {
                tracing::warn!("failed to delete {}: {}", path.display(), e);
            }
            DeleteOutcome { file_name, result }
        })
        .collect()
}

/// Find and delete all `server-*.log` files directly under `home`
pub fn sweep_logs(home: &Path) -> Result<Vec<DeleteOutcome>> {
    let logs = find_server_logs(home)?;
    tracing::debug!("found {} server logs in {}", logs.len(), home.display());
    Ok(delete_logs(&logs))
}
