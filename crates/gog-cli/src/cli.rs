//! CLI argument parsing using clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gog - Link files to git repositories
#[derive(Parser, Debug)]
#[command(name = "gog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add files or directories to a repository and link them
    ///
    /// Each path is copied into the repository, then replaced by a symlink
    /// to the copy. Existing files are backed up as `.NAME.gog` first.
    ///
    /// Examples:
    ///   gog add ~/.bashrc
    ///   gog add -r work ~/.config/nvim
    Add {
        /// Name of the repository (defaults to the default repository)
        #[arg(short, long, value_name = "NAME")]
        repository: Option<String>,

        /// Files or directories to add
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Remove files or directories from a repository
    ///
    /// Links are replaced by plain copies before the repository copies are
    /// deleted.
    Remove {
        /// Name of the repository (defaults to the default repository)
        #[arg(short, long, value_name = "NAME")]
        repository: Option<String>,

        /// Files or directories to remove
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Link every file in a repository to the filesystem
    Apply {
        /// Name of the repository (defaults to the default repository)
        #[arg(short, long, value_name = "NAME")]
        repository: Option<String>,
    },

    /// Run a git command in a repository
    ///
    /// Everything after the options is passed to git unchanged.
    ///
    /// Examples:
    ///   gog git status
    ///   gog git -r work log --oneline
    Git {
        /// Name of the repository (defaults to the default repository)
        #[arg(short, long, value_name = "NAME")]
        repository: Option<String>,

        /// Arguments passed to git
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Manage repositories
    Repository {
        #[command(subcommand)]
        action: RepositoryAction,
    },
}

/// Repository management actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryAction {
    /// Create a repository, cloning URL if given
    Add {
        /// Name of the new repository
        name: String,

        /// Git URL to clone from
        url: Option<String>,
    },

    /// Delete a repository and all its files
    Remove {
        /// Name of the repository
        name: String,
    },

    /// Print the name of the default repository
    GetDefault {
        /// Print the path instead of the name
        #[arg(short, long)]
        path: bool,
    },

    /// Print the names of all repositories
    List {
        /// Print paths instead of names
        #[arg(short, long)]
        path: bool,
    },
}
