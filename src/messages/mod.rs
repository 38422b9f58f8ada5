//! User-facing status text.
//!
//! Status lines are looked up by symbolic key in a [`MessageCatalog`] loaded
//! once from `messages.ini` next to the executable. Lookups never fail: an
//! unknown key yields a diagnostic string naming the key, so the program
//! keeps reporting even when the catalog is missing or incomplete.
//!
//! Templates use positional `{0}`, `{1}` placeholders, filled in by
//! [`format_template`].

pub mod catalog;
pub mod format;

pub use catalog::{CATALOG_FILE_NAME, CATALOG_NOT_FOUND, MessageCatalog};
pub use format::format_template;

/// Keys the maintenance pass looks up.
pub mod keys {
    pub const PROGRAM_NOT_FOR_LINUX: &str = "ProgramNotForLinux";
    pub const STARTING_CLEANUP: &str = "StartingCleanup";
    pub const BASH_HISTORY_CLEANED: &str = "BashHistoryCleaned";
    pub const BASH_HISTORY_NOT_FOUND: &str = "BashHistoryNotFound";
    pub const BASH_HISTORY_CREATED: &str = "BashHistoryCreated";
    /// `{0}`: error description
    pub const BASH_HISTORY_ERROR: &str = "BashHistoryError";
    /// `{0}`: file name
    pub const LOG_FILE_DELETED: &str = "LogFileDeleted";
    /// `{0}`: file name, `{1}`: error description
    pub const LOG_FILE_DELETE_FAILED: &str = "LogFileDeleteFailed";
}
