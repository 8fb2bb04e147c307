//! Version-control trait and the `git` command-line implementation

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::{Command, Stdio};

use git2::Repository;

use crate::{Error, Result};

/// Operations gog needs from a version-control system.
///
/// Only [`run`](VersionControl::run) must be implemented. The remaining
/// methods are expressed in terms of it, except for repository discovery and
/// initialisation, which go through libgit2 and never spawn a process.
pub trait VersionControl {
    /// Run a git command with `cwd` as working directory.
    fn run(&self, cwd: &Path, args: &[&OsStr]) -> Result<()>;

    /// Whether `path` is the root of an initialised repository.
    fn is_repository(&self, path: &Path) -> bool {
        Repository::open(path).is_ok_and(|repo| {
            repo.workdir()
                .is_some_and(|wd| same_dir(wd, path))
        })
    }

    /// Create an empty repository at `path`.
    fn init(&self, path: &Path) -> Result<()> {
        Repository::init(path)?;
        tracing::debug!(path = %path.display(), "Initialised repository");
        Ok(())
    }

    /// Clone `url` into `path`.
    ///
    /// Shells out so that the user's credential helpers and SSH setup apply.
    fn clone_into(&self, url: &str, path: &Path) -> Result<()> {
        let cwd = path.parent().unwrap_or(path);
        self.run(cwd, &[OsStr::new("clone"), OsStr::new(url), path.as_os_str()])
    }

    /// Stage `path` in the repository at `repo`.
    fn track(&self, repo: &Path, path: &Path) -> Result<()> {
        self.run(repo, &[OsStr::new("add"), OsStr::new("--"), path.as_os_str()])
    }

    /// Remove `path` from the repository at `repo` and from its work tree.
    fn untrack(&self, repo: &Path, path: &Path) -> Result<()> {
        self.run(
            repo,
            &[
                OsStr::new("rm"),
                OsStr::new("-q"),
                OsStr::new("-f"),
                OsStr::new("--"),
                path.as_os_str(),
            ],
        )
    }
}

/// Runs the `git` executable with inherited standard streams.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use `git` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl VersionControl for GitCli {
    fn run(&self, cwd: &Path, args: &[&OsStr]) -> Result<()> {
        let rendered = args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(cwd = %cwd.display(), args = %rendered, "Running git");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                cwd: cwd.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                cwd: cwd.to_path_buf(),
                args: rendered,
                status,
            });
        }
        Ok(())
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
