//! One-shot wisher commands over the HTTP API
//!
//! Each command drives a fresh `WisherListController`, the same state
//! machine the interactive page uses, so the create/delete semantics are
//! identical across surfaces.
//!
//! ```bash
//! wishctl list --json | jq '.[].user_id'
//! wishctl add "Alice"
//! wishctl remove U1
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use wishctl_api::HttpCollection;
use wishctl_core::WisherListController;

/// Output format (shared across commands)
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
    /// Quiet mode - user ids only
    Quiet,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long, short, conflicts_with = "output")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the wisher to track
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Server-assigned user id of the wisher
    pub user_id: String,
}

fn get_output_format(output: OutputFormat, json_flag: bool, quiet_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else if quiet_flag {
        OutputFormat::Quiet
    } else {
        output
    }
}

fn build_controller(endpoint: &str) -> Result<WisherListController<HttpCollection>> {
    let client = HttpCollection::new(endpoint).context("Failed to build HTTP client")?;
    Ok(WisherListController::new(client))
}

pub async fn run_list(endpoint: &str, args: ListArgs) -> Result<()> {
    let format = get_output_format(args.output, args.json, args.quiet);

    let mut controller = build_controller(endpoint)?;
    controller
        .initialize()
        .await
        .context("Failed to fetch wishers")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(controller.wishers())?);
        }
        OutputFormat::Quiet => {
            for wisher in controller.wishers() {
                println!("{}", wisher.user_id);
            }
        }
        OutputFormat::Human => {
            let wishers = controller.wishers();
            println!("┌─ wishers ({})", wishers.len());
            println!("│");

            if wishers.is_empty() {
                println!("│  (no wishers)");
            } else {
                for (i, wisher) in wishers.iter().enumerate() {
                    let is_last = i == wishers.len() - 1;
                    let prefix = if is_last { "└─" } else { "├─" };
                    let cont_prefix = if is_last { "   " } else { "│  " };

                    println!("{} {}", prefix, wisher.name);
                    if wisher.is_confirmed() {
                        println!("{}user_id: {}", cont_prefix, wisher.user_id);
                    } else {
                        println!("{}[unconfirmed]", cont_prefix);
                    }

                    if !is_last {
                        println!("│");
                    }
                }
            }
        }
    }

    Ok(())
}

pub async fn run_add(endpoint: &str, args: AddArgs) -> Result<()> {
    if args.name.is_empty() {
        return Err(anyhow!("Name must not be empty"));
    }

    let mut controller = build_controller(endpoint)?;
    controller
        .submit_create(&args.name)
        .await
        .context("Failed to add wisher")?;

    if let Some(wisher) = controller.wishers().last() {
        println!("✓ Added {} (user_id: {})", wisher.name, wisher.user_id);
    }

    Ok(())
}

pub async fn run_remove(endpoint: &str, args: RemoveArgs) -> Result<()> {
    let mut controller = build_controller(endpoint)?;
    controller
        .submit_delete_by_user_id(&args.user_id)
        .await
        .context("Failed to remove wisher")?;

    println!("✓ Removed {}", args.user_id);

    Ok(())
}
