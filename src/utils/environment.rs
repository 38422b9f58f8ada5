use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::messages::CATALOG_FILE_NAME;

/// Get the current user's home directory
///
/// On Unix this honours `$HOME` before falling back to the password database.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine the home directory")
}

/// Get the path of `messages.ini` in the directory holding the executable
pub fn get_catalog_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe.parent().context("Executable path has no parent directory")?;
    Ok(dir.join(CATALOG_FILE_NAME))
}
