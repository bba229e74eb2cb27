//! Interactive shell over an in-memory task store.
//!
//! Usage:
//!
//! ```text
//! taskboard [--ids uuid|sequential] [--id-prefix P] [--default-priority P] [--log-level L]
//! ```
//!
//! Commands are read from standard input one line at a time; `help` lists
//! them. Tasks live only for the duration of the session. Log output goes to
//! standard error and is filtered by `TASKBOARD_LOG`, falling back to
//! `--log-level`.

mod cli;
mod view;

use clap::Parser;
use mockable::DefaultClock;
use std::io;
use std::sync::Arc;
use taskboard::task::services::TaskStore;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const LOG_ENV: &str = "TASKBOARD_LOG";

fn main() -> Result<(), BoxError> {
    let args = cli::Args::parse();
    init_tracing(&args.log_level)?;

    let store = TaskStore::new(Arc::new(args.id_generator()), Arc::new(DefaultClock));
    tracing::info!(ids = ?args.ids, default_priority = %args.default_priority, "task store ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = view::Shell::new(store, args.default_priority, stdout.lock());
    shell.run(stdin.lock())?;
    Ok(())
}

fn init_tracing(fallback: &str) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()?;
    Ok(())
}
