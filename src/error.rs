use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while bootstrapping or tearing down the shell. Window
/// operations themselves are infallible by design (unknown ids degrade to
/// no-ops), so the error surface is terminal and log-file setup only.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
