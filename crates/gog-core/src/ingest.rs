//! Moving external paths into a repository and taking them out again

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gog_fs::PathMapper;

use crate::validate::{should_skip, validate_target_path};
use crate::{Error, Result};

/// Copy `target` into the repository at its internal location.
///
/// Directories are copied recursively, leaving out backups and anything that
/// already lives in `base_dir`. A target that already resolves to its internal
/// path is left alone.
pub fn add_path(paths: &PathMapper, base_dir: &Path, target: &Path) -> Result<()> {
    validate_target_path(target, base_dir)?;

    let resolved = dunce::canonicalize(target).map_err(|e| Error::io(target, e))?;
    let internal = paths.to_internal(target);
    if dunce::canonicalize(&internal).is_ok_and(|internal| internal == resolved) {
        tracing::debug!(path = %target.display(), "Already in repository");
        return Ok(());
    }

    if resolved.is_dir() {
        let bases = managed_dirs(base_dir);
        gog_fs::copy_dir(&resolved, &internal, &|src: &Path, _: &Path| {
            bases.iter().any(|base| should_skip(src, base))
        })?;
    } else {
        if let Some(parent) = internal.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        gog_fs::copy_file(&resolved, &internal)?;
    }

    tracing::debug!(from = %target.display(), to = %internal.display(), "Copied into repository");
    Ok(())
}

/// Delete the internal counterpart of `target`. A missing path is not an
/// error.
pub fn remove_path(paths: &PathMapper, base_dir: &Path, target: &Path) -> Result<()> {
    validate_target_path(target, base_dir)?;

    let internal = paths.to_internal(target);
    let metadata = match fs::symlink_metadata(&internal) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(&internal, e)),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(&internal)
    } else {
        fs::remove_file(&internal)
    }
    .map_err(|e| Error::io(&internal, e))?;

    tracing::debug!(path = %internal.display(), "Removed from repository");
    Ok(())
}

/// [`add_path`] for each target, stopping at the first failure.
pub fn add_paths(paths: &PathMapper, base_dir: &Path, targets: &[PathBuf]) -> Result<()> {
    targets
        .iter()
        .try_for_each(|target| add_path(paths, base_dir, target))
}

/// [`remove_path`] for each target, stopping at the first failure.
pub fn remove_paths(paths: &PathMapper, base_dir: &Path, targets: &[PathBuf]) -> Result<()> {
    targets
        .iter()
        .try_for_each(|target| remove_path(paths, base_dir, target))
}

// Copied entries have their symlinks resolved, so the base directory is
// compared both as configured and as resolved.
fn managed_dirs(base_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![base_dir.to_path_buf()];
    if let Ok(resolved) = dunce::canonicalize(base_dir) {
        if resolved != base_dir {
            dirs.push(resolved);
        }
    }
    dirs
}
