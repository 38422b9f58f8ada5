use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::maintenance::{emit, run_maintenance};
use crate::messages::{CATALOG_NOT_FOUND, MessageCatalog};
use crate::platform::Gate;
use crate::utils::{get_catalog_path, get_home_dir};

#[derive(Parser)]
#[command(name = "home-janitor")]
#[command(version = "0.1.0")]
#[command(
    about = "Trim ~/.bash_history at the ### marker and delete ~/server-*.log files",
    long_about = None
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let catalog = match get_catalog_path() {
        Ok(path) => load_catalog(&path, &mut out)?,
        Err(e) => {
            tracing::warn!("{:#}", e);
            emit(&mut out, CATALOG_NOT_FOUND)?;
            MessageCatalog::default()
        }
    };
    let gate = Gate::detect();

    let home = match gate {
        Gate::Proceed => get_home_dir()?,
        // Nothing is touched, so an unresolvable home must not abort the notice
        Gate::NotApplicable => get_home_dir().unwrap_or_default(),
    };

    run_maintenance(gate, &home, &catalog, &mut out)
}

/// Load the catalog at `path`, writing the fallback notice when it is unavailable
///
/// # Errors
///
/// Only failures to write the notice to `out` are returned.
pub fn load_catalog<W: Write>(path: &Path, out: &mut W) -> Result<MessageCatalog> {
    match MessageCatalog::load(path) {
        Ok(Some(catalog)) => Ok(catalog),
        Ok(None) => {
            emit(out, CATALOG_NOT_FOUND)?;
            Ok(MessageCatalog::default())
        }
        Err(e) => {
            tracing::warn!("{:#}", e);
            emit(out, CATALOG_NOT_FOUND)?;
            Ok(MessageCatalog::default())
        }
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
