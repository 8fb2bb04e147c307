//! The `apply` command

use gog_core::Engine;

use super::report::ConsoleReporter;
use crate::context::Context;
use crate::error::Result;

/// Link every file of the repository into the filesystem.
pub fn run_apply(ctx: &Context, repository: Option<&str>) -> Result<()> {
    let root = ctx.open_repository(repository)?;
    let engine = Engine::new(&root, &ctx.config, &ctx.git);

    let mut reporter = ConsoleReporter::new();
    engine.link_dir(&root, &mut reporter)?;
    tracing::debug!(skipped = reporter.failures(), "Applied repository");
    Ok(())
}
