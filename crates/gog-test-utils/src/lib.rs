//! Shared test utilities for the gog workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures at two realism levels
//! - [`sandbox`]: [`Sandbox`], a throwaway home directory plus repository
//! - [`vcs`]: [`RecordingVcs`], a version-control double that records commands

pub mod git;
pub mod sandbox;
pub mod vcs;

pub use sandbox::Sandbox;
pub use vcs::RecordingVcs;
