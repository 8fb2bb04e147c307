//! Error types for gog-fs

use std::path::PathBuf;

/// Result type for gog-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gog-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source must be a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert a traversal failure below `root`, keeping the path it occurred at.
    pub fn walk(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source.path().unwrap_or(root).to_path_buf();
        Self::io(path, source.into())
    }

    /// The underlying I/O error kind, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::Backup { source, .. } => Some(source.kind()),
            Self::NotADirectory { .. } => None,
        }
    }
}
