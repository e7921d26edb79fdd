//! Address Book - interactive entry point.
//!
//! Runs the numbered menu on stdin/stdout. Logs go to stderr.

use address_book::{Config, ContactStore, Session};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        file = %config.file.display(),
        persist = config.persist,
        "Starting address book"
    );

    let mut store = ContactStore::new();
    let stdin = io::stdin();
    let session = Session::new(&mut store, stdin.lock(), io::stdout());
    let session = if config.persist {
        session.with_file(&config.file)
    } else {
        session
    };

    if let Err(e) = session.run() {
        error!("Address book session failed: {}", e);
        return Err(e).with_context(|| format!("Address book at {}", config.file.display()));
    }

    Ok(())
}
