//! wishctl CLI - wish-list tracker client
//!
//! This is the main entry point for the wishctl command-line tool, which
//! provides:
//! - One-shot wisher operations against the backend (`list`, `add`, `remove`)
//! - The interactive tracker page (`tui` subcommand)
//! - Shell completion generation (`completions` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "wishctl",
    author,
    version,
    about = "Track wishers against the wish-list backend",
    long_about = "List, add, and remove tracked wishers, persisting through the wish-list \
                  backend's REST API. The `tui` subcommand opens the interactive tracker \
                  page with optimistic updates and a dismissible error banner."
)]
struct Cli {
    /// API endpoint (default: http://localhost:8004)
    #[arg(long, env = "WISHCTL_ENDPOINT", global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tracked wishers
    List(commands::ListArgs),
    /// Add a wisher by name
    Add(commands::AddArgs),
    /// Remove a wisher by user id
    Remove(commands::RemoveArgs),
    /// Open the interactive tracker page
    Tui,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    let endpoint = wishctl_api::resolve_endpoint(cli.endpoint);

    match cli.command {
        Commands::List(args) => commands::run_list(&endpoint, args).await?,
        Commands::Add(args) => commands::run_add(&endpoint, args).await?,
        Commands::Remove(args) => commands::run_remove(&endpoint, args).await?,
        Commands::Tui => tui::run(&endpoint).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
