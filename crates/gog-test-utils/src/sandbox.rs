//! [`Sandbox`]: an isolated home directory with one repository in it.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::git::real_git_repo;

/// Name of the repository every sandbox starts with.
pub const REPO_NAME: &str = "dotfiles";

/// A temporary directory laid out like a user account:
///
/// ```text
/// <root>/home/                 home directory
/// <root>/data/gog/             repository base directory
/// <root>/data/gog/dotfiles/    initialised repository
/// ```
///
/// The root is canonicalised, so paths compare equal to resolved symlink
/// targets.
pub struct Sandbox {
    _temp: TempDir,
    root: PathBuf,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Create the layout and initialise the repository.
    ///
    /// # Panics
    /// Panics if any filesystem or git operation fails.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Sandbox::new: failed to create temp dir");
        let root = temp
            .path()
            .canonicalize()
            .expect("Sandbox::new: failed to canonicalise temp dir");

        let sandbox = Self { _temp: temp, root };
        fs::create_dir_all(sandbox.home()).expect("Sandbox::new: failed to create home");
        fs::create_dir_all(sandbox.repo()).expect("Sandbox::new: failed to create repository");
        real_git_repo(&sandbox.repo());
        sandbox
    }

    /// The temporary root holding everything else.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The sandboxed home directory.
    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    /// The repository base directory.
    pub fn base_dir(&self) -> PathBuf {
        self.root.join("data/gog")
    }

    /// Root of the default repository.
    pub fn repo(&self) -> PathBuf {
        self.base_dir().join(REPO_NAME)
    }

    /// `rel` below the home directory.
    pub fn external(&self, rel: &str) -> PathBuf {
        self.home().join(rel)
    }

    /// Repository location mirroring `rel` below the home directory.
    pub fn internal(&self, rel: &str) -> PathBuf {
        self.repo().join("$HOME").join(rel)
    }

    /// Write `content` to `rel` below the home directory, creating parents.
    pub fn write_external(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.external(rel), content)
    }

    /// Write `content` to the repository copy of `rel`, creating parents.
    pub fn write_internal(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.internal(rel), content)
    }

    /// Write `content` to `rel` relative to the repository root.
    pub fn write_repo_file(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.repo().join(rel), content)
    }

    /// Assert that `link` is a symlink whose target is exactly `target`.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_links_to(&self, link: &Path, target: &Path) {
        let actual = fs::read_link(link)
            .unwrap_or_else(|e| panic!("Expected symlink at {}: {e}", link.display()));
        assert_eq!(actual, target, "Symlink {} has wrong target", link.display());
    }

    /// Assert that `path` is a regular file (not a symlink) holding `content`.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_plain_file(&self, path: &Path, content: &str) {
        let metadata = fs::symlink_metadata(path)
            .unwrap_or_else(|e| panic!("Expected file at {}: {e}", path.display()));
        assert!(
            metadata.file_type().is_file(),
            "Expected plain file at {}",
            path.display()
        );
        let actual = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", path.display()));
        assert_eq!(actual, content, "Unexpected content in {}", path.display());
    }

    /// Assert that nothing exists at `path`, not even a dangling symlink.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_absent(&self, path: &Path) {
        assert!(
            fs::symlink_metadata(path).is_err(),
            "Expected nothing at {}",
            path.display()
        );
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create {}: {e}", parent.display()));
    }
    fs::write(path, content).unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
    path.to_path_buf()
}
