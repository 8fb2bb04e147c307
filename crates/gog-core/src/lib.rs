//! Core of gog: linking repository files into the filesystem
//!
//! This crate implements:
//!
//! - **Reconciliation engine**: [`Engine`] links every file of a repository
//!   to its external location and can restore plain files again
//! - **Configuration**: [`Config`], read once from the environment
//! - **Validation**: guards for repository names, repository paths and
//!   paths about to be ingested
//! - **Repository store**: [`RepositoryStore`] creates, removes, lists and
//!   resolves repositories in the per-user base directory
//! - **Ingest**: copying external paths into a repository and removing them
//!
//! # Architecture
//!
//! ```text
//!            gog-cli
//!               |
//!            gog-core
//!               |
//!        +------+------+
//!        |             |
//!     gog-fs        gog-git
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod report;
pub mod store;
pub mod validate;

pub use config::Config;
pub use engine::{Direction, Engine, LinkOutcome, Resolution, UnlinkOutcome};
pub use error::{Error, Result};
pub use report::{LinkEvent, Reporter};
pub use store::RepositoryStore;
