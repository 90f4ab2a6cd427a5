//! sitesearch CLI - search a static site's exported index
//!
//! # Examples
//!
//! ```bash
//! # One query against a local export
//! sitesearch search "async rust" --index public/local-search.xml
//!
//! # Interactive session against a deployed site
//! sitesearch shell --index https://blog.example.com/local-search.xml
//!
//! # Index statistics as JSON
//! sitesearch --format json index-info
//! ```

use clap::Parser;
use sitesearch::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitesearch=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout carries results
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
