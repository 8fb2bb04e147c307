//! Error types for gog-git

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for gog-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gog-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to run git in {cwd}: {source}")]
    Spawn {
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {args}` failed in {cwd} ({status})")]
    CommandFailed {
        cwd: PathBuf,
        args: String,
        status: ExitStatus,
    },
}
