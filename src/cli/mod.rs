//! CLI adapter for sitesearch
//!
//! Plays the part of the search UI: every command opens a search
//! session, feeds it input and closes it again.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// sitesearch - local search over static-site indexes
///
/// Loads the search index exported by a static site build
/// (local-search.xml or search.json) and matches keywords against
/// post titles and contents.
#[derive(Parser, Debug)]
#[command(name = "sitesearch")]
#[command(version)]
#[command(about = "Local search over static-site indexes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single query against the index
    Search(commands::SearchArgs),

    /// Interactive search: one query per line until EOF or :q
    Shell(commands::ShellArgs),

    /// Show statistics about the index
    #[command(name = "index-info")]
    IndexInfo(commands::IndexInfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  sitesearch completions bash > ~/.local/share/bash-completion/completions/sitesearch
    ///   zsh:   sitesearch completions zsh > ~/.zfunc/_sitesearch
    ///   fish:  sitesearch completions fish > ~/.config/fish/completions/sitesearch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Shell(args) => commands::shell::execute(args, &services, cli.format).await,
        Commands::IndexInfo(args) => {
            commands::index_info::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
