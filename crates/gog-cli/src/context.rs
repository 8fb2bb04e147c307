//! Process state shared by all commands
//!
//! Configuration is read from the environment exactly once, here. Commands
//! receive a [`Context`] and never consult the environment themselves.

use std::path::PathBuf;

use colored::Colorize;
use gog_core::store::repo_name;
use gog_core::{Config, RepositoryStore};
use gog_git::GitCli;

use crate::error::Result;

/// Configuration plus the git implementation to use.
pub struct Context {
    pub config: Config,
    pub git: GitCli,
}

impl Context {
    /// Build the context from the process environment.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        tracing::debug!(
            home = %config.home_dir.display(),
            base_dir = %config.base_dir.display(),
            backups_disabled = config.backups_disabled,
            "Loaded configuration"
        );
        Ok(Self::new(config))
    }

    pub fn new(config: Config) -> Self {
        Self {
            config,
            git: GitCli::new(),
        }
    }

    /// The repository store, creating the base directory if needed.
    pub fn store(&self) -> Result<RepositoryStore<'_>> {
        Ok(RepositoryStore::from_config(&self.config, &self.git)?)
    }

    /// Resolve the repository a command operates on and announce it.
    pub fn open_repository(&self, name: Option<&str>) -> Result<PathBuf> {
        let root = self.store()?.root_path(name)?;
        println!("{} {}", "Repository:".bold(), repo_name(&root).cyan());
        Ok(root)
    }
}
