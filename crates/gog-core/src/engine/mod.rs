//! Link/unlink reconciliation engine
//!
//! The engine walks a directory tree inside a repository and, for every
//! entry, either projects it outward as a symlink ([`Engine::link_dir`],
//! [`Engine::link_file`]) or replaces such a symlink with a plain copy of the
//! file ([`Engine::unlink_dir`], [`Engine::unlink_file`]).
//!
//! # Failure policy
//!
//! The two directions deliberately treat per-entry failures differently and
//! this must be preserved:
//!
//! - **Link** reports a failing entry and carries on with its siblings. A link
//!   that could not be created leaves the external path as it was (or safely
//!   backed up), so continuing is harmless.
//! - **Unlink** stops at the first failure. Once an external symlink has been
//!   removed, a failed copy leaves a path that is neither linked nor restored,
//!   and the user must see that before anything else is touched.
//!
//! Only a failure to read the tree itself aborts a link walk.

mod link;
mod unlink;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gog_fs::PathMapper;
use gog_git::VersionControl;

use crate::report::Reporter;
use crate::{Config, Error, Result};

pub use link::{LinkOutcome, Resolution};
pub use unlink::UnlinkOutcome;

/// Which way [`Engine::sync`] reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Create symlinks from the filesystem into the repository.
    Link,
    /// Replace those symlinks with plain files.
    Unlink,
}

/// Reconciles one repository with the filesystem.
pub struct Engine<'a> {
    paths: PathMapper,
    config: &'a Config,
    vcs: &'a dyn VersionControl,
    track_links: bool,
}

impl<'a> Engine<'a> {
    /// Create an engine for the repository at `repo_root`.
    ///
    /// `repo_root` must already be validated; the engine never creates or
    /// deletes it.
    pub fn new(repo_root: impl Into<PathBuf>, config: &'a Config, vcs: &'a dyn VersionControl) -> Self {
        Self {
            paths: PathMapper::new(repo_root, config.home_dir.clone()),
            config,
            vcs,
            track_links: false,
        }
    }

    /// Stage the internal file of every newly created link with git.
    pub fn track_links(mut self, enabled: bool) -> Self {
        self.track_links = enabled;
        self
    }

    /// The path translator for this repository.
    pub fn paths(&self) -> &PathMapper {
        &self.paths
    }

    /// The repository root.
    pub fn repo_root(&self) -> &Path {
        self.paths.repo_root()
    }

    /// Reconcile each external path in `externals`.
    ///
    /// Each path is translated to its internal counterpart; paths the
    /// repository does not contain are skipped. Directories are walked, files
    /// handled directly. The first error aborts the remaining paths.
    pub fn sync(
        &self,
        direction: Direction,
        externals: &[PathBuf],
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        for external in externals {
            let internal = self.paths.to_internal(external);
            let metadata = match fs::symlink_metadata(&internal) {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %internal.display(), "Not in repository, nothing to update");
                    continue;
                }
                Err(e) => return Err(Error::io(&internal, e)),
            };

            match (direction, metadata.is_dir()) {
                (Direction::Link, true) => self.link_dir(&internal, reporter)?,
                (Direction::Link, false) => {
                    self.link_file(&internal, reporter);
                }
                (Direction::Unlink, true) => self.unlink_dir(&internal, reporter)?,
                (Direction::Unlink, false) => {
                    self.unlink_file(&internal, reporter)?;
                }
            }
        }
        Ok(())
    }
}
