//! Repositories for gog tests
//!
//! A repository gog links from only has to be recognised by git, so
//! [`real_git_repo`] is enough for most tests. `gog repository add NAME URL`
//! needs something to clone; [`real_git_repo_with_commit`] provides it.

use std::fs;
use std::path::Path;
use std::process::Command;

/// An empty repository at `path`, created in-process.
///
/// # Panics
/// Panics if the repository cannot be created.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path)
        .unwrap_or_else(|e| panic!("cannot create repository at {}: {e}", path.display()))
}

/// A clone source at `path`: one commit holding `$HOME/.profile`.
///
/// Built with the `git` binary, a throwaway identity and commit signing off.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    let run = |args: &[&str]| {
        let output = Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap_or_else(|e| {
                panic!("real_git_repo_with_commit: failed to run `git {args:?}`: {e}")
            });
        if !output.status.success() {
            panic!(
                "real_git_repo_with_commit: `git {args:?}` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
    };

    run(&["init"]);
    run(&["config", "user.email", "test@test.com"]);
    run(&["config", "user.name", "Test User"]);
    run(&["config", "commit.gpgsign", "false"]);

    fs::create_dir_all(path.join("$HOME"))
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to create $HOME: {e}"));
    fs::write(path.join("$HOME/.profile"), "export EDITOR=vi\n")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write .profile: {e}"));

    run(&["add", "."]);
    run(&["commit", "-m", "Initial commit"]);
}
