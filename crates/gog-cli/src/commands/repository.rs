//! The `repository` subcommands

use std::path::Path;

use gog_core::store::repo_name;

use crate::context::Context;
use crate::error::Result;

/// Create a repository and print its path.
pub fn run_repository_add(ctx: &Context, name: &str, url: Option<&str>) -> Result<()> {
    let path = ctx.store()?.add(name, url)?;
    println!("{}", path.display());
    Ok(())
}

/// Delete a repository and print its path.
pub fn run_repository_remove(ctx: &Context, name: &str) -> Result<()> {
    let path = ctx.store()?.remove(name)?;
    println!("{}", path.display());
    Ok(())
}

/// Print the default repository.
pub fn run_repository_get_default(ctx: &Context, as_path: bool) -> Result<()> {
    let path = ctx.store()?.default_repository()?;
    println!("{}", describe(&path, as_path));
    Ok(())
}

/// Print every repository, one per line.
pub fn run_repository_list(ctx: &Context, as_path: bool) -> Result<()> {
    for path in ctx.store()?.list()? {
        println!("{}", describe(&path, as_path));
    }
    Ok(())
}

fn describe(path: &Path, as_path: bool) -> String {
    if as_path {
        path.display().to_string()
    } else {
        repo_name(path)
    }
}
