//! Process-wide configuration
//!
//! Read once at startup and passed by reference to everything that needs it.
//! Nothing below the CLI reads the environment itself.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{Error, Result};

/// Presence disables backups: conflicting files are removed instead.
pub const ENV_NO_BACKUPS: &str = "GOG_DO_NOT_CREATE_BACKUPS";
/// Regular expression of repository-relative paths that are never linked.
pub const ENV_IGNORE_FILES_REGEX: &str = "GOG_IGNORE_FILES_REGEX";
/// Overrides the directory holding all repositories.
pub const ENV_GOG_HOME: &str = "GOG_HOME";
/// Name of the repository used when none is given.
pub const ENV_DEFAULT_REPOSITORY: &str = "GOG_DEFAULT_REPOSITORY_NAME";
/// XDG data directory; repositories live in `$XDG_DATA_HOME/gog`.
pub const ENV_XDG_DATA_HOME: &str = "XDG_DATA_HOME";

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Real home directory, substituted for `$HOME` in internal paths
    pub home_dir: PathBuf,
    /// Directory holding all repositories
    pub base_dir: PathBuf,
    /// Repository used when none is named
    pub default_repository: Option<String>,
    /// Remove conflicting files instead of backing them up
    pub backups_disabled: bool,
    /// Extra files excluded from linking, matched against the
    /// repository-relative path
    pub ignore_pattern: Option<Regex>,
}

impl Config {
    /// Configuration with defaults: backups on, nothing extra ignored.
    pub fn new(home_dir: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            base_dir: base_dir.into(),
            default_repository: None,
            backups_disabled: false,
            ignore_pattern: None,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Self::from_lookup(&home, |key| std::env::var(key).ok())
    }

    /// Build configuration from `lookup`, which plays the role of the
    /// environment.
    pub fn from_lookup<F>(home_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let base_dir = match (non_empty(ENV_GOG_HOME), non_empty(ENV_XDG_DATA_HOME)) {
            (Some(gog_home), _) => PathBuf::from(gog_home),
            (None, Some(data_home)) => Path::new(&data_home).join("gog"),
            (None, None) => home_dir.join(".local/share/gog"),
        };

        let ignore_pattern = non_empty(ENV_IGNORE_FILES_REGEX)
            .map(|pattern| Regex::new(&pattern))
            .transpose()
            .map_err(|source| Error::InvalidIgnorePattern {
                var: ENV_IGNORE_FILES_REGEX,
                source,
            })?;

        Ok(Self {
            home_dir: home_dir.to_path_buf(),
            base_dir,
            default_repository: non_empty(ENV_DEFAULT_REPOSITORY),
            backups_disabled: lookup(ENV_NO_BACKUPS).is_some(),
            ignore_pattern,
        })
    }

    /// Disable or enable backups.
    pub fn with_backups_disabled(mut self, disabled: bool) -> Self {
        self.backups_disabled = disabled;
        self
    }

    /// Set the ignore pattern.
    pub fn with_ignore_pattern(mut self, pattern: Option<Regex>) -> Self {
        self.ignore_pattern = pattern;
        self
    }

    /// Set the default repository name.
    pub fn with_default_repository(mut self, name: Option<String>) -> Self {
        self.default_repository = name;
        self
    }
}
