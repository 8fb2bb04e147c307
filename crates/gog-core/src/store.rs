//! Repositories kept in the per-user base directory
//!
//! Each repository is a direct child directory of the base directory, named
//! after the repository. Names are validated before they are ever joined onto
//! the base directory, and resolved paths are checked to stay inside it.

use std::fs;
use std::path::{Path, PathBuf};

use gog_git::VersionControl;

use crate::validate::{validate_repo_name, validate_repo_path};
use crate::{Config, Error, Result};

/// Creates, removes, lists and resolves repositories.
pub struct RepositoryStore<'a> {
    base_dir: PathBuf,
    default_name: Option<String>,
    vcs: &'a dyn VersionControl,
}

impl<'a> RepositoryStore<'a> {
    /// Store rooted at `base_dir`. Nothing is created on disk.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        default_name: Option<String>,
        vcs: &'a dyn VersionControl,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            default_name,
            vcs,
        }
    }

    /// Store described by `config`, creating the base directory if needed.
    pub fn from_config(config: &Config, vcs: &'a dyn VersionControl) -> Result<Self> {
        fs::create_dir_all(&config.base_dir).map_err(|e| Error::io(&config.base_dir, e))?;
        Ok(Self::new(
            &config.base_dir,
            config.default_repository.clone(),
            vcs,
        ))
    }

    /// The directory holding all repositories.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create repository `name`, cloned from `url` when given, otherwise empty.
    pub fn add(&self, name: &str, url: Option<&str>) -> Result<PathBuf> {
        validate_repo_name(name)?;
        let path = self.base_dir.join(name);
        if validate_repo_path(&path, self.vcs).is_ok() {
            return Err(Error::RepoExists { path });
        }

        fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        match url {
            Some(url) => self.vcs.clone_into(url, &path)?,
            None => self.vcs.init(&path)?,
        }
        tracing::info!(name, path = %path.display(), "Added repository");
        Ok(path)
    }

    /// Delete repository `name` and everything in it.
    pub fn remove(&self, name: &str) -> Result<PathBuf> {
        validate_repo_name(name)?;
        let path = self.base_dir.join(name);
        validate_repo_path(&path, self.vcs)?;

        fs::remove_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        tracing::info!(name, path = %path.display(), "Removed repository");
        Ok(path)
    }

    /// Paths of all directories in the base directory, sorted by name.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.base_dir, e)),
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.base_dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    /// The repository used when none is named.
    ///
    /// The configured default wins. Otherwise the first directory, in name
    /// order, that is an initialised repository.
    pub fn default_repository(&self) -> Result<PathBuf> {
        if let Some(name) = &self.default_name {
            validate_repo_name(name)?;
            let path = self.base_dir.join(name);
            validate_repo_path(&path, self.vcs)?;
            return Ok(path);
        }

        self.list()?
            .into_iter()
            .find(|path| self.vcs.is_repository(path))
            .ok_or(Error::NoRepositories)
    }

    /// Resolve `name` to a repository root.
    ///
    /// A missing or empty name selects [`default_repository`]. An exact name
    /// wins over a prefix; a prefix must match exactly one repository.
    ///
    /// [`default_repository`]: Self::default_repository
    pub fn root_path(&self, name: Option<&str>) -> Result<PathBuf> {
        let name = match name.map(str::trim) {
            None | Some("") => return self.default_repository(),
            Some(name) => name,
        };
        validate_repo_name(name)?;

        let exact = self.base_dir.join(name);
        let path = if exact.is_dir() {
            exact
        } else {
            self.find_by_prefix(name, exact)?
        };

        self.ensure_inside_base(&path)?;
        validate_repo_path(&path, self.vcs)?;
        Ok(path)
    }

    fn find_by_prefix(&self, prefix: &str, exact: PathBuf) -> Result<PathBuf> {
        let mut matches: Vec<PathBuf> = self
            .list()?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with(prefix))
            })
            .collect();

        match matches.len() {
            0 => Err(Error::RepoNotFound { path: exact }),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousRepoName {
                name: prefix.to_string(),
                matches: matches
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    fn ensure_inside_base(&self, path: &Path) -> Result<()> {
        let base = dunce::canonicalize(&self.base_dir).map_err(|e| Error::io(&self.base_dir, e))?;
        let resolved = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
        if resolved == base || !resolved.starts_with(&base) {
            return Err(Error::OutsideBaseDir {
                path: resolved,
                base_dir: base,
            });
        }
        Ok(())
    }
}

/// The repository name of a repository root.
pub fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
