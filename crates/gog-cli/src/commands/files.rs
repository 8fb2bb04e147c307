//! The `add` and `remove` commands

use std::path::{Component, Path, PathBuf};

use gog_core::{Direction, Engine, ingest};

use super::report::ConsoleReporter;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Copy `paths` into the repository and link them back.
pub fn run_add(ctx: &Context, repository: Option<&str>, paths: &[PathBuf]) -> Result<()> {
    let paths = clean_paths(paths, &std::env::current_dir()?)?;
    let root = ctx.open_repository(repository)?;
    let engine = Engine::new(&root, &ctx.config, &ctx.git).track_links(true);

    ingest::add_paths(engine.paths(), &ctx.config.base_dir, &paths)?;

    let mut reporter = ConsoleReporter::new();
    engine.sync(Direction::Link, &paths, &mut reporter)?;
    tracing::debug!(skipped = reporter.failures(), "Added paths");
    Ok(())
}

/// Replace links to `paths` with plain files and drop them from the
/// repository.
pub fn run_remove(ctx: &Context, repository: Option<&str>, paths: &[PathBuf]) -> Result<()> {
    let paths = clean_paths(paths, &std::env::current_dir()?)?;
    let root = ctx.open_repository(repository)?;
    let engine = Engine::new(&root, &ctx.config, &ctx.git);

    let mut reporter = ConsoleReporter::new();
    engine.sync(Direction::Unlink, &paths, &mut reporter)?;

    ingest::remove_paths(engine.paths(), &ctx.config.base_dir, &paths)?;
    Ok(())
}

/// Make `paths` absolute against `cwd` and normalise them, dropping blank
/// arguments.
pub fn clean_paths(paths: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let cleaned: Vec<PathBuf> = paths
        .iter()
        .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
        .map(|p| normalize(&cwd.join(p)))
        .collect();

    if cleaned.is_empty() {
        return Err(CliError::user("Specify at least one file or directory path"));
    }
    Ok(cleaned)
}

/// Lexically remove `.` and `..` components and redundant separators.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_joined_to_cwd() {
        let cleaned = clean_paths(&[PathBuf::from(".bashrc")], Path::new("/home/u")).unwrap();
        assert_eq!(cleaned, vec![PathBuf::from("/home/u/.bashrc")]);
    }

    #[test]
    fn absolute_paths_ignore_cwd() {
        let cleaned = clean_paths(&[PathBuf::from("/etc/hosts")], Path::new("/home/u")).unwrap();
        assert_eq!(cleaned, vec![PathBuf::from("/etc/hosts")]);
    }

    #[test]
    fn dots_are_resolved_lexically() {
        let cleaned = clean_paths(
            &[PathBuf::from("./a/../b//c/."), PathBuf::from("../../../x")],
            Path::new("/home/u"),
        )
        .unwrap();
        assert_eq!(
            cleaned,
            vec![PathBuf::from("/home/u/b/c"), PathBuf::from("/x")]
        );
    }

    #[test]
    fn blank_arguments_are_dropped() {
        let cleaned = clean_paths(
            &[PathBuf::from(""), PathBuf::from("  "), PathBuf::from("a")],
            Path::new("/home/u"),
        )
        .unwrap();
        assert_eq!(cleaned, vec![PathBuf::from("/home/u/a")]);
    }

    #[test]
    fn only_blank_arguments_is_an_error() {
        let result = clean_paths(&[PathBuf::from(" ")], Path::new("/home/u"));
        assert!(matches!(result, Err(CliError::User { .. })));
    }
}
