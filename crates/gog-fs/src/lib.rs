//! Filesystem primitives for gog
//!
//! Provides the repository path-naming scheme, backup naming and renaming,
//! recursive copying and a depth-first tree walker. Nothing in this crate
//! knows about git or about repositories beyond their root path.

pub mod backup;
pub mod constants;
pub mod copy;
pub mod error;
pub mod path;
pub mod symlink;
pub mod walk;

pub use backup::{backup, backup_path, is_backup_path};
pub use constants::{BACKUP_SUFFIX, DIR_MODE, GIT_DIR, HOME_TOKEN, RESERVED_NAMES, ReservedFile};
pub use copy::{copy_dir, copy_file};
pub use error::{Error, Result};
pub use path::{PathMapper, escape_home};
pub use symlink::{create_symlink, is_symlink, same_file};
pub use walk::{WalkControl, WalkHandler, walk};
