use std::path::{Path, PathBuf};

/// Name of the bash history file under the home directory
pub const HISTORY_FILE_NAME: &str = ".bash_history";

/// Path of the bash history file for `home`
pub fn history_path(home: &Path) -> PathBuf {
    home.join(HISTORY_FILE_NAME)
}
