//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod index_info;
pub mod search;
pub mod shell;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index_info::IndexInfoArgs;
pub use search::SearchArgs;
pub use shell::ShellArgs;

use crate::cli::output::RenderOptions;
use crate::core::services::Services;

/// Index location from a command flag, falling back to the configured one
pub(crate) fn resolve_location<'a>(index: &'a Option<String>, services: &'a Services) -> &'a str {
    index.as_deref().unwrap_or(&services.config.index.location)
}

/// Render options from the configuration and command flags
pub(crate) fn render_options(
    services: &Services,
    limit: Option<usize>,
    urls_only: bool,
) -> RenderOptions {
    let search = &services.config.search;
    RenderOptions {
        limit: limit.unwrap_or(search.default_limit),
        urls_only,
        highlight_pre: search.highlight_pre.clone(),
        highlight_post: search.highlight_post.clone(),
    }
}
