//! Error types for gog-core

use std::path::PathBuf;

/// Result type for gog-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gog-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository name contains characters outside `[A-Za-z0-9_-]`
    #[error("Invalid repository name: {name}")]
    InvalidRepoName { name: String },

    /// Repository path does not exist
    #[error("Invalid repository path: {path}")]
    RepoNotFound { path: PathBuf },

    /// Repository path exists but is not a directory
    #[error("Repository path must be a directory: {path}")]
    RepoNotADirectory { path: PathBuf },

    /// Repository directory is not a git repository
    #[error("Repository must be initialized as a git repository: {path}")]
    RepoNotInitialized { path: PathBuf },

    /// A repository with this name already exists
    #[error("Repository already exists: {path}")]
    RepoExists { path: PathBuf },

    /// More than one repository starts with the given name
    #[error("Repository name '{name}' is ambiguous, it matches: {matches}")]
    AmbiguousRepoName { name: String, matches: String },

    /// Resolved repository lies outside the base directory
    #[error("Repository path is outside of {base_dir}: {path}")]
    OutsideBaseDir { path: PathBuf, base_dir: PathBuf },

    /// The base directory holds no repository
    #[error("Run `gog repository add` to add a repository")]
    NoRepositories,

    /// Path may not be added to or removed from a repository
    #[error("Invalid target path: {path}")]
    InvalidTargetPath { path: PathBuf },

    /// A directory occupies the place where a link should go
    #[error("Path expected to be a file, but is a directory: {path}")]
    ExpectedFile { path: PathBuf },

    /// Moving an existing path out of the way failed
    #[error("Backup of existing file failed. Skipping: {source}")]
    BackupFailed {
        #[source]
        source: gog_fs::Error,
    },

    /// The ignore pattern from the environment does not compile
    #[error("Invalid regular expression {var}: {source}")]
    InvalidIgnorePattern {
        var: &'static str,
        #[source]
        source: regex::Error,
    },

    /// No home directory could be determined
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from gog-fs
    #[error(transparent)]
    Fs(#[from] gog_fs::Error),

    /// Git error from gog-git
    #[error(transparent)]
    Git(#[from] gog_git::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs(gog_fs::Error::io(path, source))
    }
}
