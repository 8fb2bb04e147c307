//! Depth-first directory traversal
//!
//! [`walk`] visits a tree in deterministic order (directory entries sorted by
//! name) and hands each entry to a [`WalkHandler`]. Directories are reported
//! before their contents, and the handler decides through [`WalkControl`]
//! whether to descend. Returning an error from either callback aborts the
//! whole walk; a failure to read a directory does the same.
//!
//! Entries are classified without following symlinks, so a symlink to a
//! directory is handed to [`WalkHandler::on_file`].

use std::path::Path;

use walkdir::WalkDir;

use crate::Error;

/// What to do after a directory has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Descend into the directory.
    Continue,
    /// Do not visit anything below the directory.
    SkipSubtree,
}

/// Per-entry callbacks for [`walk`].
pub trait WalkHandler {
    /// Error type that aborts the walk. Must absorb traversal failures.
    type Error: From<Error>;

    /// Called for every directory, including the root, before its contents.
    fn on_dir(&mut self, path: &Path) -> Result<WalkControl, Self::Error>;

    /// Called for every non-directory entry.
    fn on_file(&mut self, path: &Path) -> Result<(), Self::Error>;
}

/// Walk the tree rooted at `root`.
///
/// `root` may itself be a file, in which case only `on_file` is called. A
/// symlinked `root` is not followed either.
pub fn walk<H: WalkHandler>(root: &Path, handler: &mut H) -> Result<(), H::Error> {
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|e| Error::walk(root, e))?;
        let path = entry.path();

        if !entry.file_type().is_dir() {
            handler.on_file(path)?;
            continue;
        }
        if handler.on_dir(path)? == WalkControl::SkipSubtree {
            tracing::trace!(path = %path.display(), "Pruned subtree");
            entries.skip_current_dir();
        }
    }

    Ok(())
}
