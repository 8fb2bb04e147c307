//! [`RecordingVcs`]: a [`VersionControl`] that records instead of running git.

use std::cell::RefCell;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use gog_git::{Error, Result, VersionControl};

/// Records every command passed to [`VersionControl::run`].
///
/// Repository discovery and initialisation still go through libgit2, so a
/// sandbox repository is recognised as usual. Commands can be made to fail
/// with [`RecordingVcs::failing`].
#[derive(Debug, Default)]
pub struct RecordingVcs {
    commands: RefCell<Vec<(PathBuf, String)>>,
    fail: bool,
}

impl RecordingVcs {
    /// Succeed on every command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command, as if git could not be started.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The recorded commands, arguments joined by spaces.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// Working directories of the recorded commands.
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        self.commands
            .borrow()
            .iter()
            .map(|(cwd, _)| cwd.clone())
            .collect()
    }
}

impl VersionControl for RecordingVcs {
    fn run(&self, cwd: &Path, args: &[&OsStr]) -> Result<()> {
        let rendered = args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        self.commands
            .borrow_mut()
            .push((cwd.to_path_buf(), rendered));

        if self.fail {
            return Err(Error::Spawn {
                cwd: cwd.to_path_buf(),
                source: io::Error::other("git disabled for this test"),
            });
        }
        Ok(())
    }
}
