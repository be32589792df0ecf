//! Omnibar command line
//!
//! Runs the command bar core against an in-memory browser and prints what it
//! would do as JSON.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use omnibar_core::{Config, TabPlacementPolicy};
use std::path::PathBuf;

use commands::EngineArg;

#[derive(Parser)]
#[command(name = "omnibar")]
#[command(version, about = "Resolve command bar input and plan new tab placement")]
#[command(after_help = "\
Examples:
  omnibar resolve example.com
  omnibar resolve --engine g=Google g hello world
  omnibar place --policy last --index 2 --tab-count 5
  omnibar open --tabs 3 github tokio
  omnibar tabopen --related --browser-version 56.0 https://example.com
")]
struct Cli {
    /// JSON config file (tabopenpos, relatedopenpos, newtab, searchurls, searchengine)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a query without opening anything
    Resolve {
        /// Browser search engine as ALIAS=NAME, repeatable
        #[arg(long = "engine")]
        engines: Vec<EngineArg>,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Compute where a new tab would be placed
    Place {
        #[arg(long)]
        policy: TabPlacementPolicy,

        /// Opened as if middle-clicked from the current tab
        #[arg(long)]
        related: bool,

        /// Index of the current tab
        #[arg(long)]
        index: usize,

        /// Id of the current tab
        #[arg(long, default_value_t = 1)]
        id: u64,

        /// Tabs in the current window
        #[arg(long)]
        tab_count: usize,

        #[arg(long, default_value_t = 128)]
        browser_version: u32,
    },

    /// Dispatch a query in the active tab of a simulated window
    Open {
        #[arg(long = "engine")]
        engines: Vec<EngineArg>,

        /// Tabs in the simulated window
        #[arg(long, default_value_t = 1)]
        tabs: usize,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Open a URL in a new tab of a simulated window
    Tabopen {
        #[arg(long)]
        related: bool,

        /// Do not focus the new tab
        #[arg(long)]
        background: bool,

        #[arg(long, default_value_t = 1)]
        tabs: usize,

        #[arg(long, default_value = "128.0")]
        browser_version: String,

        url: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    omnibar_core::init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let output = match cli.command {
        Commands::Resolve { engines, query } => {
            commands::navigation::resolve(&config, &engines, &query)
        }
        Commands::Place {
            policy,
            related,
            index,
            id,
            tab_count,
            browser_version,
        } => commands::tabs::place(policy, related, index, id, tab_count, browser_version),
        Commands::Open {
            engines,
            tabs,
            query,
        } => commands::navigation::open(config, &engines, tabs, &query).await,
        Commands::Tabopen {
            related,
            background,
            tabs,
            browser_version,
            url,
        } => {
            commands::tabs::tabopen(config, &url, related, !background, tabs, &browser_version)
                .await
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if !output.success {
        std::process::exit(1);
    }
    Ok(())
}
