//! Core domain logic (adapter-agnostic)
//!
//! This module contains everything that is independent of how
//! results are presented.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, match results, responses
//! - **xdg**: XDG config directory handling
//! - **index**: Index loading and parsing (XML / JSON)
//! - **search**: Tokenizer, matcher, snippets
//! - **session**: Open/input/close lifecycle
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod index;
pub mod search;
pub mod services;
pub mod session;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiteSearchError};
pub use services::Services;
