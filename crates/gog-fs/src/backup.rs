//! Backups of external files that are about to be replaced
//!
//! A backup is the original path renamed in place: the leaf name is hidden
//! with a leading `.` and suffixed with [`BACKUP_SUFFIX`]. Renaming it back
//! restores the original bytes and mode.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::BACKUP_SUFFIX;
use crate::{Error, Result};

/// Compute the backup location for `path`.
///
/// `notes.txt` becomes `.notes.txt.gog`; an already hidden `.bashrc` becomes
/// `.bashrc.gog`.
pub fn backup_path(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default();
    let mut backup = OsString::with_capacity(name.len() + BACKUP_SUFFIX.len() + 1);
    if !name.as_encoded_bytes().starts_with(b".") {
        backup.push(".");
    }
    backup.push(name);
    backup.push(BACKUP_SUFFIX);
    path.with_file_name(backup)
}

/// Whether `path` names a backup file.
pub fn is_backup_path(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(BACKUP_SUFFIX.as_bytes())
}

/// Move `path` out of the way to its [`backup_path`].
///
/// An existing backup file is replaced, but an existing directory at the
/// backup location is never overwritten.
pub fn backup(path: &Path) -> Result<PathBuf> {
    let target = backup_path(path);

    if fs::symlink_metadata(&target).is_ok_and(|m| m.is_dir()) {
        return Err(Error::Backup {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("backup location is a directory: {}", target.display()),
            ),
        });
    }

    fs::rename(path, &target).map_err(|source| Error::Backup {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(from = %path.display(), to = %target.display(), "Backed up existing path");
    Ok(target)
}
