//! The `git` passthrough command

use std::ffi::{OsStr, OsString};

use gog_git::VersionControl;

use crate::context::Context;
use crate::error::Result;

/// Run git with `args` inside the repository.
pub fn run_git(ctx: &Context, repository: Option<&str>, args: &[OsString]) -> Result<()> {
    let root = ctx.open_repository(repository)?;
    let args: Vec<&OsStr> = args.iter().map(OsString::as_os_str).collect();
    ctx.git.run(&root, &args)?;
    Ok(())
}
