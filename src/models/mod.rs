//! Outcome types for the maintenance pass.
//!
//! Each step returns a value describing what it did instead of printing
//! directly. The reporting layer in [`crate::maintenance`] turns every
//! outcome into exactly one status line:
//!
//! - [`TrimOutcome`] - result of trimming or seeding `~/.bash_history`
//! - [`DeleteOutcome`] - result of deleting one `server-*.log` file

pub mod outcome;

pub use outcome::{DeleteOutcome, TrimOutcome};
