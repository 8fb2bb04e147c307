//! gog CLI
//!
//! Links files in the filesystem to copies kept in git repositories.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, RepositoryAction};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::from_env()?;
    execute_command(&ctx, cli.command)
}

fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add { repository, paths } => {
            commands::run_add(ctx, repository.as_deref(), &paths)
        }
        Commands::Remove { repository, paths } => {
            commands::run_remove(ctx, repository.as_deref(), &paths)
        }
        Commands::Apply { repository } => commands::run_apply(ctx, repository.as_deref()),
        Commands::Git { repository, args } => {
            commands::run_git(ctx, repository.as_deref(), &args)
        }
        Commands::Repository { action } => match action {
            RepositoryAction::Add { name, url } => {
                commands::run_repository_add(ctx, &name, url.as_deref())
            }
            RepositoryAction::Remove { name } => commands::run_repository_remove(ctx, &name),
            RepositoryAction::GetDefault { path } => {
                commands::run_repository_get_default(ctx, path)
            }
            RepositoryAction::List { path } => commands::run_repository_list(ctx, path),
        },
    }
}
