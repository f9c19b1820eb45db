//! Logging init: append to a file under the XDG state dir, or stderr.
//!
//! Both the CLI commands and the form server log through `tracing`; the
//! filter defaults to [`DEFAULT_FILTER`] and is overridden by `RUST_LOG`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,pagetmpl=debug,pagetmpl_core=debug,pagetmpl_cli=debug";

const LOG_FILE_NAME: &str = "pagetmpl.log";

/// Where log lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/pagetmpl/pagetmpl.log`; the directory is created.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagetmpl")?;
    let path = xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create log directory")?;
    Ok(path)
}

fn open_log(path: &Path) -> Result<fs::File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Installs the global subscriber writing to `dest`.
///
/// Errors if the file cannot be opened or a subscriber is already set.
pub fn init(dest: &LogDestination) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);
    let installed = match dest {
        LogDestination::File(path) => {
            // `&File` is `Write`, so the shared handle serves every event.
            let file = Arc::new(open_log(path)?);
            builder.with_writer(file).try_init()
        }
        LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("install subscriber: {e}"))
}

/// Logs to the XDG state file. Returns Err so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    init(&LogDestination::File(path.clone()))?;
    tracing::info!("pagetmpl logging initialized at {}", path.display());
    Ok(())
}

/// Logs to stderr; never fails, a second call is a no-op.
pub fn init_logging_stderr() {
    let _ = init(&LogDestination::Stderr);
}
