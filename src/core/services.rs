//! Unified service container for sitesearch
//!
//! Provides shared access to configuration and the index loader, and
//! creates search sessions bound to them.

use crate::core::config::Config;
use crate::core::index::{IndexLoader, SourceLoader};
use crate::core::session::SearchSession;
use std::sync::Arc;
use std::time::Duration;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Index loader shared by every session
    pub loader: Arc<dyn IndexLoader>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, loading indexes from disk or HTTP
    pub fn new(config: Config) -> Self {
        Self::with_loader(config, Arc::new(SourceLoader::default()))
    }

    /// Create services with an explicit loader
    pub fn with_loader(config: Config, loader: Arc<dyn IndexLoader>) -> Self {
        Self {
            loader,
            config: Arc::new(config),
        }
    }

    /// Create a closed session for the configured index location
    pub fn create_session(&self) -> SearchSession {
        self.create_session_for(&self.config.index.location)
    }

    /// Create a closed session for an explicit index location
    pub fn create_session_for(&self, location: &str) -> SearchSession {
        SearchSession::new(
            Arc::clone(&self.loader),
            location,
            Duration::from_secs(self.config.index.timeout_sec),
            &self.config.search,
        )
    }
}
