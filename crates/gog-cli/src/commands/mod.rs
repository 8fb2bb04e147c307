//! Command implementations for gog-cli

pub mod apply;
pub mod files;
pub mod git;
pub mod report;
pub mod repository;

pub use apply::run_apply;
pub use files::{run_add, run_remove};
pub use git::run_git;
pub use repository::{
    run_repository_add, run_repository_get_default, run_repository_list, run_repository_remove,
};
