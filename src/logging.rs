//! Diagnostics sink.
//!
//! While the shell runs it owns the terminal, so tracing output cannot go to
//! stderr without corrupting the UI. Diagnostics are appended to a log file
//! when one is configured and discarded otherwise.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::error::ShellError;

/// Install the global tracing subscriber writing to `path`, when given.
/// Safe to call multiple times; subsequent calls are no-ops for the global
/// subscriber.
pub fn init(path: Option<&Path>) -> Result<(), ShellError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ShellError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
