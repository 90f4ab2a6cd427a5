//! Search command - run one query against the index

use crate::cli::commands::{render_options, resolve_location};
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (keywords separated by spaces or hyphens, all must match)
    pub query: String,

    /// Index location (path or http(s) URL), overrides the configuration
    #[arg(long, short = 'i')]
    pub index: Option<String>,

    /// Maximum number of results shown (0 = all)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show result URLs
    #[arg(long)]
    pub urls_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = resolve_location(&args.index, services);
    let mut session = services.create_session_for(location);

    let stats = session.open().await?;
    tracing::debug!("Searching {} documents", stats.documents);

    let response = session.input(&args.query)?;
    session.close();

    if response.keywords.is_empty() && format == OutputFormat::Human {
        println!(
            "{}",
            colors::dim("Empty query: type one or more keywords to search")
        );
        return Ok(());
    }

    let options = render_options(services, args.limit, args.urls_only);
    output::print_response(&response, &options, format)?;

    Ok(())
}
