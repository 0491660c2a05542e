//! Log setup for the binary.
//!
//! The terminal belongs to the UI, so logs go to a file, never to stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "chat_panel=info";

/// `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// With no path, logging stays off. Returns whether a subscriber was
/// installed; a second call is a no-op.
pub fn init_logging(path: Option<&Path>) -> io::Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
