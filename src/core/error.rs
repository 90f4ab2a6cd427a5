//! Error types and error handling for sitesearch.
//!
//! This module defines the error types used throughout the
//! library. Malformed index entries are not errors: the loader
//! recovers them locally and only whole-index failures surface.

use thiserror::Error;

/// Result type alias for sitesearch operations
pub type Result<T> = std::result::Result<T, SiteSearchError>;

/// Main error type for sitesearch
#[derive(Error, Debug)]
pub enum SiteSearchError {
    #[error("Search index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Search session is not ready (index not loaded)")]
    SessionNotReady,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiteSearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the index could not be loaded
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SiteSearchError::IndexUnavailable(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SiteSearchError::InvalidQuery(_) | SiteSearchError::ConfigError(_)
        )
    }
}
