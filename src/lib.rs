//! sitesearch - local search over static-site indexes
//!
//! Loads the search index a static site build exports
//! (`local-search.xml` or a JSON equivalent), and answers keyword
//! queries with highlighted snippets, entirely in memory.
//!
//! # Architecture
//!
//! - **core**: Domain logic (presentation-agnostic)
//!   - config, error, types, xdg
//!   - index (loading and parsing)
//!   - search (tokenizer, matcher, snippets)
//!   - session (open/input/close lifecycle)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output
//!
//! # Matching rules
//!
//! - A document matches when every keyword occurs in its title or in
//!   its markup-free content (case-insensitive substring search)
//! - Results keep index order
//! - Snippets are cut around the first keyword and highlighted

// Core domain logic
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, SiteSearchError};
pub use crate::core::services::Services;
pub use crate::core::session::{SearchSession, SessionEvent};
pub use crate::core::types::*;
