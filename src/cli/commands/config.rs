//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'p')]
    pub paths: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: &'a crate::core::config::Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    let config_file = args
        .paths
        .then(|| XdgDirs::new().config_file().to_string_lossy().into_owned());

    let response = ConfigResponse {
        config_file,
        config,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            if let Some(file) = &response.config_file {
                println!("  config_file: {file}");
            }
            println!("  index:");
            println!("    location: {}", config.index.location);
            println!("    timeout_sec: {}", config.index.timeout_sec);
            println!("  search:");
            println!(
                "    include_content_in_search: {}",
                config.search.include_content_in_search
            );
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("    default_limit: {}", config.search.default_limit);
            println!("    highlight_pre: {:?}", config.search.highlight_pre);
            println!("    highlight_post: {:?}", config.search.highlight_post);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
