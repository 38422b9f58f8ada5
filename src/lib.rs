//! Home Janitor - trims shell history and sweeps stale server logs
//!
//! This library implements a small maintenance pass over the current user's
//! home directory. It supports:
//!
//! - Loading user-facing status text from an optional `messages.ini` catalog
//! - Trimming `~/.bash_history` down to the first `###` sentinel line
//! - Seeding a default `~/.bash_history` when none exists
//! - Deleting `server-*.log` files directly under the home directory
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use home_janitor::{Gate, MessageCatalog, run_maintenance};
//!
//! let home = PathBuf::from("/home/alice");
//! let catalog = MessageCatalog::default();
//! let mut stdout = std::io::stdout();
//! run_maintenance(Gate::detect(), &home, &catalog, &mut stdout)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod maintenance;
pub mod messages;
pub mod models;
pub mod platform;
pub mod utils;

// Re-export commonly used types
pub use maintenance::run_maintenance;
pub use messages::{MessageCatalog, format_template};
pub use platform::Gate;
