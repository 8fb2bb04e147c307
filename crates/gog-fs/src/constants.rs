//! Constants and enums for repository filesystem paths.

use std::path::Path;

/// Placeholder stored in internal paths in place of the home directory.
pub const HOME_TOKEN: &str = "$HOME";

/// Suffix appended to backup file names.
pub const BACKUP_SUFFIX: &str = ".gog";

/// Git metadata directory at the top of every repository.
pub const GIT_DIR: &str = ".git";

/// Mode used when creating external directories.
pub const DIR_MODE: u32 = 0o755;

/// Leaf names at the repository root that are never linked.
pub const RESERVED_NAMES: [ReservedFile; 3] = [
    ReservedFile::GitIgnore,
    ReservedFile::License,
    ReservedFile::Readme,
];

/// Files that describe a repository rather than belong to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedFile {
    /// The `.gitignore` file
    GitIgnore,
    /// The `LICENSE` file
    License,
    /// The `README.md` file
    Readme,
}

impl ReservedFile {
    /// Get the string representation of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitIgnore => ".gitignore",
            Self::License => "LICENSE",
            Self::Readme => "README.md",
        }
    }

    /// Whether `name` is one of the reserved leaf names.
    pub fn matches(name: &std::ffi::OsStr) -> bool {
        RESERVED_NAMES.iter().any(|r| name == r.as_str())
    }
}

impl AsRef<Path> for ReservedFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ReservedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
