//! Per-entry progress reporting
//!
//! The engine reports each link, unlink and per-entry failure as it happens,
//! so partial progress stays visible even when a walk aborts later.

use std::fmt;
use std::path::PathBuf;

use gog_fs::escape_home;

use crate::Error;

/// Something the engine did, or failed to do, for a single entry.
#[derive(Debug)]
pub enum LinkEvent {
    /// A symlink was created at `external` pointing at `internal`.
    Linked { external: PathBuf, internal: PathBuf },
    /// The symlink at `external` was replaced by a copy of `internal`.
    Unlinked { internal: PathBuf, external: PathBuf },
    /// The entry at `path` was skipped because of `error`.
    Failed { path: PathBuf, error: Error },
}

impl LinkEvent {
    /// Whether this event is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for LinkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linked { external, internal } => {
                write!(f, "{} -> {}", external.display(), escape_home(internal))
            }
            Self::Unlinked { internal, external } => {
                write!(f, "{} -> {}", escape_home(internal), external.display())
            }
            Self::Failed { path, error } => write!(f, "{} {}", path.display(), error),
        }
    }
}

/// Receives [`LinkEvent`]s from the engine.
pub trait Reporter {
    fn report(&mut self, event: LinkEvent);
}

impl Reporter for Vec<LinkEvent> {
    fn report(&mut self, event: LinkEvent) {
        self.push(event);
    }
}
