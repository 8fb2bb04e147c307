//! File and directory copying

use std::fs::{self, File};
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, Result};

/// Copy the contents and permission bits of `src` to `dst`.
///
/// `dst` is created if missing and truncated otherwise. Its parent directory
/// must already exist.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let mut input = File::open(src).map_err(|e| Error::io(src, e))?;
    let mut output = File::create(dst).map_err(|e| Error::io(dst, e))?;

    io::copy(&mut input, &mut output).map_err(|e| Error::io(dst, e))?;
    output.sync_all().map_err(|e| Error::io(dst, e))?;

    let permissions = fs::metadata(src)
        .map_err(|e| Error::io(src, e))?
        .permissions();
    fs::set_permissions(dst, permissions).map_err(|e| Error::io(dst, e))?;

    Ok(())
}

/// Recursively copy the directory `src` to `dst`.
///
/// Symlinked entries are resolved to their real target before being copied.
/// Entries for which `skip(source, destination)` returns `true` are left out
/// together with their subtree. Entries are visited in lexical order.
pub fn copy_dir<F>(src: &Path, dst: &Path, skip: &F) -> Result<()>
where
    F: Fn(&Path, &Path) -> bool,
{
    let metadata = fs::metadata(src).map_err(|e| Error::io(src, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: src.to_path_buf(),
        });
    }
    create_dir(dst, metadata.permissions())?;

    let mut entries = WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| Error::walk(src, e))?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let dst_path = dst.join(relative);
        let src_path = if entry.path_is_symlink() {
            fs::canonicalize(entry.path()).map_err(|e| Error::io(entry.path(), e))?
        } else {
            entry.path().to_path_buf()
        };

        let is_dir = entry.file_type().is_dir();
        if skip(&src_path, &dst_path) {
            tracing::debug!(path = %src_path.display(), "Skipping entry during copy");
            if is_dir {
                entries.skip_current_dir();
            }
            continue;
        }

        if is_dir {
            let permissions = entry
                .metadata()
                .map_err(|e| Error::walk(src, e))?
                .permissions();
            create_dir(&dst_path, permissions)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

fn create_dir(path: &Path, permissions: fs::Permissions) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_file_replaces_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old content that is longer").unwrap();

        copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn copy_file_missing_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = copy_file(&dir.path().join("nope"), &dir.path().join("dst"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn copy_dir_rejects_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("file");
        fs::write(&src, "x").unwrap();

        let result = copy_dir(&src, &dir.path().join("out"), &|_, _| false);

        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }
}
