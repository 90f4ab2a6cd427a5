//! Index info command - load the index and summarize it

use crate::cli::commands::resolve_location;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::index::is_remote;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the index-info command
#[derive(Args, Debug)]
pub struct IndexInfoArgs {
    /// Index location (path or http(s) URL), overrides the configuration
    #[arg(long, short = 'i')]
    pub index: Option<String>,
}

/// Index info response
#[derive(Debug, Serialize)]
pub struct IndexInfoResponse {
    pub location: String,
    pub remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    pub documents: usize,
    pub untitled: usize,
    pub empty_content: usize,
    pub malformed: usize,
    pub load_secs: f64,
}

/// Execute the index-info command
pub async fn execute(
    args: IndexInfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let location = resolve_location(&args.index, services);
    let mut session = services.create_session_for(location);

    let start = Instant::now();
    let stats = session.open().await?;
    let load_secs = start.elapsed().as_secs_f64();
    session.close();

    let info = IndexInfoResponse {
        location: location.to_string(),
        remote: is_remote(location),
        format: stats.format.map(|f| f.as_str()),
        documents: stats.documents,
        untitled: stats.untitled,
        empty_content: stats.empty_content,
        malformed: stats.malformed,
        load_secs,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Index:");
            println!("  location: {}", colors::url(&info.location));
            if let Some(name) = info.format {
                println!("  format: {name}");
            }
            println!("  documents: {}", colors::number(&info.documents.to_string()));
            println!("  untitled: {}", colors::number(&info.untitled.to_string()));
            println!(
                "  empty content: {}",
                colors::number(&info.empty_content.to_string())
            );
            if info.malformed > 0 {
                output::print_warning(&format!(
                    "{} entries were missing fields and were loaded with empty values",
                    info.malformed
                ));
            }
            println!("  load time: {}", output::format_duration(info.load_secs));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
