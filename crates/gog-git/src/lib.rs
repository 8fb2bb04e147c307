//! Git shell for gog
//!
//! The reconciliation engine only needs to tell git that a path was added or
//! removed. Repository bookkeeping additionally needs to create, clone and
//! recognise repositories. Both go through the [`VersionControl`] trait so
//! that callers can substitute a recording implementation in tests.

pub mod error;
pub mod shell;

pub use error::{Error, Result};
pub use shell::{GitCli, VersionControl};
