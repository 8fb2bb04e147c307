//! Translation between external paths and repository-internal paths
//!
//! An internal path mirrors its external counterpart below the repository
//! root, with the home directory prefix replaced by the literal
//! [`HOME_TOKEN`]. This keeps repositories portable between machines whose
//! home directories differ.
//!
//! Only the exact `$HOME` token is ever expanded. Any other variable-like
//! component (`$PATH`, `$USER`, ...) is an ordinary directory name, so a
//! crafted repository cannot redirect links through the environment.

use std::path::{Component, Path, PathBuf};

use crate::constants::HOME_TOKEN;

/// Maps paths between a repository and the filesystem it mirrors.
///
/// Pure: no method touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    repo_root: PathBuf,
    home: PathBuf,
}

impl PathMapper {
    /// Create a mapper for the repository at `repo_root`, expanding
    /// [`HOME_TOKEN`] to `home`.
    pub fn new(repo_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            home: home.into(),
        }
    }

    /// The repository root.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// The home directory substituted for [`HOME_TOKEN`].
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Convert an absolute external path to its location inside the repository.
    pub fn to_internal(&self, external: &Path) -> PathBuf {
        let relative = match external.strip_prefix(&self.home) {
            Ok(rest) => join_non_empty(Path::new(HOME_TOKEN), rest),
            Err(_) => external
                .strip_prefix("/")
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| external.to_path_buf()),
        };
        join_non_empty(&self.repo_root, &relative)
    }

    /// Convert an internal path back to the external location it mirrors.
    ///
    /// Paths outside the repository root are returned unchanged (after
    /// anchoring at `/`); callers are expected to pass internal paths.
    pub fn to_external(&self, internal: &Path) -> PathBuf {
        let relative = self.relative(internal).unwrap_or(internal);
        let mut components = relative.components();
        match components.next() {
            Some(Component::Normal(first)) if first == HOME_TOKEN => {
                join_non_empty(&self.home, components.as_path())
            }
            _ => Path::new("/").join(relative),
        }
    }

    /// The part of `internal` below the repository root.
    pub fn relative<'a>(&self, internal: &'a Path) -> Option<&'a Path> {
        internal.strip_prefix(&self.repo_root).ok()
    }
}

/// Escape the home placeholder so a printed path can be pasted into a shell.
pub fn escape_home(path: &Path) -> String {
    path.display()
        .to_string()
        .replacen(HOME_TOKEN, "\\$HOME", 1)
}

// `PathBuf::join("")` appends a trailing separator; avoid it.
fn join_non_empty(base: &Path, rest: &Path) -> PathBuf {
    if rest.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> PathMapper {
        PathMapper::new("/home/u/.local/share/gog/dots", "/home/u")
    }

    #[test]
    fn home_prefix_becomes_token() {
        let internal = mapper().to_internal(Path::new("/home/u/.bashrc"));
        assert_eq!(
            internal,
            PathBuf::from("/home/u/.local/share/gog/dots/$HOME/.bashrc")
        );
    }

    #[test]
    fn home_itself_maps_to_token_dir() {
        let internal = mapper().to_internal(Path::new("/home/u"));
        assert_eq!(internal, PathBuf::from("/home/u/.local/share/gog/dots/$HOME"));
        assert_eq!(mapper().to_external(&internal), PathBuf::from("/home/u"));
    }

    #[test]
    fn sibling_of_home_is_not_rewritten() {
        let internal = mapper().to_internal(Path::new("/home/u2/.bashrc"));
        assert_eq!(
            internal,
            PathBuf::from("/home/u/.local/share/gog/dots/home/u2/.bashrc")
        );
    }

    #[test]
    fn paths_outside_home_keep_their_layout() {
        let internal = mapper().to_internal(Path::new("/etc/hosts"));
        assert_eq!(internal, PathBuf::from("/home/u/.local/share/gog/dots/etc/hosts"));
        assert_eq!(mapper().to_external(&internal), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn token_must_be_a_whole_component() {
        let external = mapper().to_external(Path::new("/home/u/.local/share/gog/dots/$HOMER/x"));
        assert_eq!(external, PathBuf::from("/$HOMER/x"));
    }

    #[test]
    fn escape_home_only_first_token() {
        assert_eq!(
            escape_home(Path::new("/r/$HOME/$HOME")),
            "/r/\\$HOME/$HOME"
        );
    }

    #[test]
    fn relative_strips_root() {
        let m = mapper();
        let internal = m.repo_root().join("$HOME/.vimrc");
        assert_eq!(m.relative(&internal), Some(Path::new("$HOME/.vimrc")));
        assert_eq!(m.relative(Path::new("/elsewhere")), None);
    }
}
