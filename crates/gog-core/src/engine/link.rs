//! Projecting repository files outward as symlinks

use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};

use gog_fs::{GIT_DIR, ReservedFile, WalkControl, WalkHandler};

use super::Engine;
use crate::report::{LinkEvent, Reporter};
use crate::{Error, Result};

/// What [`Engine::link_file`] did for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new symlink was created.
    Linked(Resolution),
    /// The external path already pointed at the file.
    AlreadyLinked,
    /// The file is in the ignore set.
    Ignored,
    /// The file was skipped; the failure has been reported.
    Failed,
}

/// How the external path was cleared before a symlink was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing was in the way.
    Created,
    /// A dangling symlink was removed.
    ReplacedBrokenLink,
    /// The existing path was moved to the given backup location.
    BackedUp(PathBuf),
    /// The existing path was deleted (backups disabled).
    Removed,
}

enum Conflict {
    AlreadyLinked,
    Cleared(Resolution),
}

struct LinkWalker<'e, 'a, 'r> {
    engine: &'e Engine<'a>,
    reporter: &'r mut dyn Reporter,
}

impl WalkHandler for LinkWalker<'_, '_, '_> {
    type Error = Error;

    fn on_dir(&mut self, path: &Path) -> Result<WalkControl> {
        let root = self.engine.repo_root();
        if path == root {
            return Ok(WalkControl::Continue);
        }
        if path == root.join(GIT_DIR) {
            return Ok(WalkControl::SkipSubtree);
        }

        match self.engine.prepare_external_dir(path) {
            Ok(()) => Ok(WalkControl::Continue),
            Err(error) => {
                self.reporter.report(LinkEvent::Failed {
                    path: path.to_path_buf(),
                    error,
                });
                Ok(WalkControl::SkipSubtree)
            }
        }
    }

    fn on_file(&mut self, path: &Path) -> Result<()> {
        self.engine.link_file(path, &mut *self.reporter);
        Ok(())
    }
}

impl Engine<'_> {
    /// Link every file below `dir`, creating external directories as needed.
    ///
    /// Per-entry failures are reported and skipped. Only a failure to read the
    /// tree is returned.
    pub fn link_dir(&self, dir: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        let mut walker = LinkWalker {
            engine: self,
            reporter,
        };
        gog_fs::walk(dir, &mut walker)
    }

    /// Link a single repository file to its external location.
    pub fn link_file(&self, file: &Path, reporter: &mut dyn Reporter) -> LinkOutcome {
        if self.is_ignored(file) {
            tracing::debug!(path = %file.display(), "Ignored");
            return LinkOutcome::Ignored;
        }

        let external = self.paths.to_external(file);
        let resolution = match gog_fs::create_symlink(file, &external) {
            Ok(()) => Resolution::Created,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                match self.resolve_conflict(file, &external) {
                    Ok(Conflict::AlreadyLinked) => {
                        tracing::debug!(path = %external.display(), "Already linked");
                        return LinkOutcome::AlreadyLinked;
                    }
                    Ok(Conflict::Cleared(resolution)) => {
                        if let Err(e) = gog_fs::create_symlink(file, &external) {
                            return self.fail(file, Error::io(&external, e), reporter);
                        }
                        resolution
                    }
                    Err(error) => return self.fail(file, error, reporter),
                }
            }
            Err(e) => return self.fail(file, Error::io(&external, e), reporter),
        };

        reporter.report(LinkEvent::Linked {
            external,
            internal: file.to_path_buf(),
        });
        if self.track_links {
            if let Err(e) = self.vcs.track(self.repo_root(), file) {
                tracing::warn!(path = %file.display(), error = %e, "Could not add file to git");
            }
        }
        LinkOutcome::Linked(resolution)
    }

    /// Whether `file` is never linked.
    ///
    /// Reserved names match the leaf name at any depth; the ignore pattern is
    /// matched against the path relative to the repository root.
    pub fn is_ignored(&self, file: &Path) -> bool {
        let Some(relative) = self.paths.relative(file) else {
            return false;
        };

        if relative.file_name().is_some_and(ReservedFile::matches) {
            return true;
        }

        self.config
            .ignore_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&relative.to_string_lossy()))
    }

    fn fail(&self, file: &Path, error: Error, reporter: &mut dyn Reporter) -> LinkOutcome {
        reporter.report(LinkEvent::Failed {
            path: file.to_path_buf(),
            error,
        });
        LinkOutcome::Failed
    }

    /// Inspect whatever occupies `external` and clear it if that is safe.
    fn resolve_conflict(&self, internal: &Path, external: &Path) -> Result<Conflict> {
        let metadata = fs::symlink_metadata(external).map_err(|e| Error::io(external, e))?;
        if metadata.is_dir() {
            return Err(Error::ExpectedFile {
                path: external.to_path_buf(),
            });
        }

        if metadata.file_type().is_symlink() {
            match dunce::canonicalize(external) {
                Ok(target) => {
                    if dunce::canonicalize(internal).is_ok_and(|internal| internal == target) {
                        return Ok(Conflict::AlreadyLinked);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    fs::remove_file(external).map_err(|e| Error::io(external, e))?;
                    tracing::debug!(path = %external.display(), "Removed broken symlink");
                    return Ok(Conflict::Cleared(Resolution::ReplacedBrokenLink));
                }
                Err(e) => return Err(Error::io(external, e)),
            }
        }

        self.clear(external).map(Conflict::Cleared)
    }

    /// Back up `external`, or delete it when backups are disabled.
    fn clear(&self, external: &Path) -> Result<Resolution> {
        if self.config.backups_disabled {
            fs::remove_file(external).map_err(|e| Error::io(external, e))?;
            tracing::debug!(path = %external.display(), "Removed existing path");
            return Ok(Resolution::Removed);
        }
        gog_fs::backup(external)
            .map(Resolution::BackedUp)
            .map_err(|source| Error::BackupFailed { source })
    }

    /// Make the external counterpart of `dir` a real directory.
    ///
    /// A symlink in its place is moved aside first.
    fn prepare_external_dir(&self, dir: &Path) -> Result<()> {
        let external = self.paths.to_external(dir);
        if gog_fs::is_symlink(&external) {
            self.clear(&external)?;
        }
        create_dir(&external)
    }
}

#[cfg(unix)]
fn create_dir(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    DirBuilder::new()
        .recursive(true)
        .mode(gog_fs::DIR_MODE)
        .create(path)
        .map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn create_dir(path: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path)
        .map_err(|e| Error::io(path, e))
}
