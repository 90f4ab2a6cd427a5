//! Configuration management for sitesearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SiteSearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Index source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Path or http(s) URL of the exported search index
    #[serde(default = "default_location")]
    pub location: String,

    /// Upper bound on a single index load, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Disable title-only matches for documents without content
    #[serde(default)]
    pub include_content_in_search: bool,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Results shown by presenters, 0 means no limit
    #[serde(default)]
    pub default_limit: usize,

    /// Marker inserted before each highlighted keyword
    #[serde(default = "default_highlight_pre")]
    pub highlight_pre: String,

    /// Marker inserted after each highlighted keyword
    #[serde(default = "default_highlight_post")]
    pub highlight_post: String,
}

// Default value functions
fn default_location() -> String {
    "local-search.xml".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_query_length() -> usize {
    500
}

fn default_highlight_pre() -> String {
    "<span class=\"search-word\">".to_string()
}

fn default_highlight_post() -> String {
    "</span>".to_string()
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            include_content_in_search: false,
            max_query_length: default_max_query_length(),
            default_limit: 0,
            highlight_pre: default_highlight_pre(),
            highlight_post: default_highlight_post(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SiteSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SITESEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/sitesearch/config.toml)
    /// 3. ./sitesearch.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SITESEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sitesearch.toml").exists() {
                Self::from_file("sitesearch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(location) = env::var("SITESEARCH_INDEX") {
            self.index.location = location;
        }
        if let Ok(timeout) = env::var("SITESEARCH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.index.timeout_sec = t;
            }
        }

        if let Ok(include) = env::var("SITESEARCH_INCLUDE_CONTENT") {
            match include.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.search.include_content_in_search = true,
                "0" | "false" | "no" | "off" => self.search.include_content_in_search = false,
                other => tracing::warn!("Ignoring SITESEARCH_INCLUDE_CONTENT={other:?}"),
            }
        }
        if let Ok(max_query_len) = env::var("SITESEARCH_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(limit) = env::var("SITESEARCH_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.index.location.trim().is_empty() {
            return Err(SiteSearchError::ConfigError(
                "Index location must not be empty".to_string(),
            ));
        }

        if self.index.timeout_sec == 0 {
            return Err(SiteSearchError::ConfigError(
                "Index timeout must be non-zero".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(SiteSearchError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.search.highlight_pre.is_empty() || self.search.highlight_post.is_empty() {
            return Err(SiteSearchError::ConfigError(
                "Highlight markers must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Index location: {}", self.index.location);
        tracing::info!("  Index timeout: {}s", self.index.timeout_sec);
        tracing::info!(
            "  Include content in search: {}",
            self.search.include_content_in_search
        );
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Default limit: {}", self.search.default_limit);
    }
}
