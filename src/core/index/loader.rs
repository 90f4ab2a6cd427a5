//! Index loaders.
//!
//! A loader turns a configured location into an in-memory document
//! set. Every failure is reported as `IndexUnavailable`; malformed
//! entries are recovered by the parser.

use crate::core::error::{Result, SiteSearchError};
use crate::core::index::parser::{parse_index, LoadedIndex};
use crate::core::types::Document;
use async_trait::async_trait;
use std::path::Path;

/// Source of a search index
#[async_trait]
pub trait IndexLoader: Send + Sync {
    /// Load and parse the index at `location`
    async fn load(&self, location: &str) -> Result<LoadedIndex>;
}

/// Whether `location` should be fetched over HTTP
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reads an index from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileLoader;

#[async_trait]
impl IndexLoader for FileLoader {
    async fn load(&self, location: &str) -> Result<LoadedIndex> {
        let path = location.strip_prefix("file://").unwrap_or(location);

        let body = tokio::fs::read_to_string(Path::new(path))
            .await
            .map_err(|e| SiteSearchError::IndexUnavailable(format!("{path}: {e}")))?;

        tracing::debug!("Read {} bytes from {}", body.len(), path);
        parse_index(&body)
    }
}

/// Fetches an index over HTTP(S)
#[derive(Debug, Clone, Default)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IndexLoader for HttpLoader {
    async fn load(&self, location: &str) -> Result<LoadedIndex> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| SiteSearchError::IndexUnavailable(format!("{location}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteSearchError::IndexUnavailable(format!(
                "{location}: HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SiteSearchError::IndexUnavailable(format!("{location}: {e}")))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), location);
        parse_index(&body)
    }
}

/// Picks the file or HTTP loader from the location scheme
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    file: FileLoader,
    http: HttpLoader,
}

#[async_trait]
impl IndexLoader for SourceLoader {
    async fn load(&self, location: &str) -> Result<LoadedIndex> {
        if is_remote(location) {
            self.http.load(location).await
        } else {
            self.file.load(location).await
        }
    }
}

/// Serves a document set that is already in memory (bundled indexes)
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: Vec<Document>,
}

impl MemoryLoader {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl IndexLoader for MemoryLoader {
    async fn load(&self, _location: &str) -> Result<LoadedIndex> {
        Ok(LoadedIndex::from_documents(self.documents.clone()))
    }
}
