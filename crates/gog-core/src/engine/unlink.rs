//! Replacing links with plain copies of repository files

use std::fs;
use std::path::Path;

use gog_fs::{GIT_DIR, WalkControl, WalkHandler};

use super::Engine;
use crate::report::{LinkEvent, Reporter};
use crate::{Error, Result};

/// What [`Engine::unlink_file`] did for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlinkOutcome {
    /// The external link was replaced by a copy.
    Unlinked,
    /// The external path was absent or not linked to this file; untouched.
    NotLinked,
}

struct UnlinkWalker<'e, 'a, 'r> {
    engine: &'e Engine<'a>,
    reporter: &'r mut dyn Reporter,
}

impl WalkHandler for UnlinkWalker<'_, '_, '_> {
    type Error = Error;

    fn on_dir(&mut self, path: &Path) -> Result<WalkControl> {
        if path == self.engine.repo_root().join(GIT_DIR) {
            return Ok(WalkControl::SkipSubtree);
        }
        Ok(WalkControl::Continue)
    }

    fn on_file(&mut self, path: &Path) -> Result<()> {
        self.engine.unlink_file(path, &mut *self.reporter)?;
        Ok(())
    }
}

impl Engine<'_> {
    /// Unlink every file below `dir`, stopping at the first failure.
    pub fn unlink_dir(&self, dir: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        let mut walker = UnlinkWalker {
            engine: self,
            reporter,
        };
        gog_fs::walk(dir, &mut walker)
    }

    /// Replace the external link to `file` with a copy of `file`.
    ///
    /// Only an external symlink that resolves to `file` itself is touched. The
    /// file is then removed from git; a git failure is logged, not returned.
    pub fn unlink_file(&self, file: &Path, reporter: &mut dyn Reporter) -> Result<UnlinkOutcome> {
        let external = self.paths.to_external(file);
        if !gog_fs::is_symlink(&external) {
            tracing::debug!(path = %external.display(), "Not a symlink, leaving as is");
            return Ok(UnlinkOutcome::NotLinked);
        }

        match gog_fs::same_file(&external, file) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(path = %external.display(), "Not linked to repository, leaving as is");
                return Ok(UnlinkOutcome::NotLinked);
            }
            Err(e) => {
                tracing::debug!(path = %external.display(), error = %e, "Cannot stat, leaving as is");
                return Ok(UnlinkOutcome::NotLinked);
            }
        }

        fs::remove_file(&external).map_err(|e| Error::io(&external, e))?;
        gog_fs::copy_file(file, &external)?;

        reporter.report(LinkEvent::Unlinked {
            internal: file.to_path_buf(),
            external,
        });
        if let Err(e) = self.vcs.untrack(self.repo_root(), file) {
            tracing::warn!(path = %file.display(), error = %e, "Could not remove file from git");
        }
        Ok(UnlinkOutcome::Unlinked)
    }
}
