//! Guards applied before anything touches the filesystem

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use gog_git::VersionControl;
use regex::Regex;

use crate::{Error, Result};

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("repository name pattern is valid"));

/// Reject repository names that could traverse out of the base directory.
pub fn validate_repo_name(name: &str) -> Result<()> {
    if !REPO_NAME.is_match(name) {
        return Err(Error::InvalidRepoName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Require `path` to be an existing directory initialised as a repository.
pub fn validate_repo_path(path: &Path, vcs: &dyn VersionControl) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|_| Error::RepoNotFound {
        path: path.to_path_buf(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::RepoNotADirectory {
            path: path.to_path_buf(),
        });
    }
    if !vcs.is_repository(path) {
        return Err(Error::RepoNotInitialized {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reject paths that may not be ingested into, or removed from, a repository.
///
/// Anything inside `base_dir` belongs to gog itself, and backups are never
/// managed.
pub fn validate_target_path(path: &Path, base_dir: &Path) -> Result<()> {
    if should_skip(path, base_dir) {
        return Err(Error::InvalidTargetPath {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Whether `path` is inside `base_dir` or is a backup file.
pub fn should_skip(path: &Path, base_dir: &Path) -> bool {
    path.starts_with(base_dir) || gog_fs::is_backup_path(path)
}
