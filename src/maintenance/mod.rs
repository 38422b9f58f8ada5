//! The maintenance pass over the home directory
//!
//! # Error Handling Strategy
//!
//! Every step is isolated:
//!
//! - **History trimming**: a read or write failure becomes one
//!   `BashHistoryError` status line; the sweep still runs.
//! - **Log sweeping**: each deletion succeeds or fails on its own and gets its
//!   own status line. If the home directory cannot be listed the failure goes
//!   to the diagnostic log and no status line is printed.
//! - **Console writes**: the only errors propagated to the caller, since
//!   nothing can be reported without them.
//!
//! Steps return outcome values; [`report_trim`] and [`report_delete`] turn
//! them into status lines through the [`MessageCatalog`].

pub mod history;
pub mod logs;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::messages::{MessageCatalog, keys};
use crate::models::{DeleteOutcome, TrimOutcome};
use crate::platform::Gate;
use crate::utils::history_path;

pub use history::{DEFAULT_HISTORY, SENTINEL, trim_history};
pub use logs::{is_server_log, sweep_logs};

/// Run the whole maintenance pass, writing status lines to `out`
///
/// On [`Gate::NotApplicable`] a single notice is written and no file is
/// touched. Otherwise the history file is trimmed and then the server logs
/// under `home` are swept.
///
/// # Errors
///
/// Only failures to write to `out` are returned; file-system failures are
/// reported as status lines.
pub fn run_maintenance<W: Write>(
    gate: Gate,
    home: &Path,
    catalog: &MessageCatalog,
    out: &mut W,
) -> Result<()> {
    if gate == Gate::NotApplicable {
        return emit(out, &catalog.get(keys::PROGRAM_NOT_FOR_LINUX));
    }

    emit(out, &catalog.get(keys::STARTING_CLEANUP))?;

    let history = history_path(home);
    tracing::debug!("trimming {}", history.display());
    emit(out, &report_trim(&trim_history(&history), catalog))?;

    match sweep_logs(home) {
        Ok(outcomes) => {
            for outcome in &outcomes {
                emit(out, &report_delete(outcome, catalog))?;
            }
        }
        Err(e) => tracing::error!("skipping log sweep: {:#}", e),
    }

    Ok(())
}

/// Status line for a history trimming result
pub fn report_trim(result: &Result<TrimOutcome>, catalog: &MessageCatalog) -> String {
    match result {
        Ok(TrimOutcome::Trimmed { .. }) => catalog.get(keys::BASH_HISTORY_CLEANED),
        Ok(TrimOutcome::SentinelNotFound) => catalog.get(keys::BASH_HISTORY_NOT_FOUND),
        Ok(TrimOutcome::Created) => catalog.get(keys::BASH_HISTORY_CREATED),
        Err(e) => catalog.format(keys::BASH_HISTORY_ERROR, &[format!("{:#}", e).as_str()]),
    }
}

/// Status line for one log deletion
pub fn report_delete(outcome: &DeleteOutcome, catalog: &MessageCatalog) -> String {
    match &outcome.result {
        Ok(()) => catalog.format(keys::LOG_FILE_DELETED, &[outcome.file_name.as_str()]),
        Err(e) => catalog.format(
            keys::LOG_FILE_DELETE_FAILED,
            &[outcome.file_name.as_str(), e.to_string().as_str()],
        ),
    }
}

/// Write one status line
pub(crate) fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).context("Failed to write status line")
}
