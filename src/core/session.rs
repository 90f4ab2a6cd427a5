//! Search sessions.
//!
//! A session spans one open/close cycle of a search UI. It owns the
//! cached document set, the current input state and the listeners
//! that render its events. Nothing survives `close()` except the
//! listeners themselves.

use crate::core::config::SearchConfig;
use crate::core::error::{Result, SiteSearchError};
use crate::core::index::IndexLoader;
use crate::core::search::{tokenize, Matcher};
use crate::core::types::{Document, IndexStats, InputValidity, SearchResponse};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lifecycle notifications delivered to session listeners
#[derive(Debug)]
pub enum SessionEvent<'a> {
    /// Index load started
    Loading { location: &'a str },

    /// Index loaded, input enabled
    Ready { stats: &'a IndexStats },

    /// Index could not be loaded
    LoadFailed { error: &'a SiteSearchError },

    /// Results for the latest input
    Results(&'a SearchResponse),

    /// Session closed, results and input cleared
    Closed,
}

/// Callback owned by a session
pub type Listener = Box<dyn FnMut(&SessionEvent<'_>) + Send>;

/// One open/close cycle of the search UI
pub struct SearchSession {
    loader: Arc<dyn IndexLoader>,
    location: String,
    timeout: Duration,
    matcher: Matcher,
    max_query_length: usize,

    documents: Option<Vec<Document>>,
    stats: Option<IndexStats>,
    opened_at: Option<DateTime<Utc>>,
    query: String,
    validity: InputValidity,

    listeners: Vec<Listener>,
}

impl SearchSession {
    /// Create a closed session for the index at `location`
    pub fn new(
        loader: Arc<dyn IndexLoader>,
        location: impl Into<String>,
        timeout: Duration,
        search: &SearchConfig,
    ) -> Self {
        Self {
            loader,
            location: location.into(),
            timeout,
            matcher: Matcher::from_config(search),
            max_query_length: search.max_query_length,
            documents: None,
            stats: None,
            opened_at: None,
            query: String::new(),
            validity: InputValidity::Neutral,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for session events
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent<'_>) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Index location this session reads from
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Whether the index is loaded and input is accepted
    pub fn is_ready(&self) -> bool {
        self.documents.is_some()
    }

    /// Cached documents, if loaded
    pub fn documents(&self) -> Option<&[Document]> {
        self.documents.as_deref()
    }

    /// Statistics of the cached index, if loaded
    pub fn stats(&self) -> Option<&IndexStats> {
        self.stats.as_ref()
    }

    /// When the index finished loading
    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    /// Latest input
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Validity of the latest input
    pub fn validity(&self) -> InputValidity {
        self.validity
    }

    /// Open the session, loading the index unless it is already cached.
    ///
    /// Dropping the returned future cancels the load.
    pub async fn open(&mut self) -> Result<IndexStats> {
        if let Some(stats) = &self.stats {
            return Ok(stats.clone());
        }

        emit(
            &mut self.listeners,
            &SessionEvent::Loading {
                location: &self.location,
            },
        );

        let start = Instant::now();
        let loaded = match tokio::time::timeout(self.timeout, self.loader.load(&self.location)).await
        {
            Ok(result) => result,
            Err(_) => Err(SiteSearchError::IndexUnavailable(format!(
                "{}: timed out after {:?}",
                self.location, self.timeout
            ))),
        };

        let index = match loaded {
            Ok(index) => index,
            Err(error) => {
                tracing::debug!("Search index unavailable: {}", error);
                emit(&mut self.listeners, &SessionEvent::LoadFailed { error: &error });
                return Err(error);
            }
        };

        let stats = index.stats();
        tracing::info!(
            "Loaded {} documents from {} in {}ms ({} malformed)",
            stats.documents,
            self.location,
            start.elapsed().as_millis(),
            stats.malformed
        );

        self.documents = Some(index.documents);
        self.opened_at = Some(Utc::now());
        self.query.clear();
        self.validity = InputValidity::Neutral;
        let stats: &IndexStats = self.stats.insert(stats);

        emit(&mut self.listeners, &SessionEvent::Ready { stats });

        Ok(stats.clone())
    }

    /// Handle an input change: tokenize, match and publish results.
    pub fn input(&mut self, query: &str) -> Result<SearchResponse> {
        let documents = self
            .documents
            .as_deref()
            .ok_or(SiteSearchError::SessionNotReady)?;

        let query_len = query.chars().count();
        if query_len > self.max_query_length {
            return Err(SiteSearchError::InvalidQuery(format!(
                "Query is {query_len} characters, the limit is {}",
                self.max_query_length
            )));
        }

        let start = Instant::now();
        let keywords = tokenize(query);

        let response = if keywords.is_empty() {
            SearchResponse::empty(query)
        } else {
            let results = self.matcher.match_documents(documents, &keywords);
            let validity = if results.is_empty() {
                InputValidity::Invalid
            } else {
                InputValidity::Valid
            };

            SearchResponse {
                query: query.to_string(),
                keywords,
                count: results.len(),
                results,
                validity,
                duration_ms: start.elapsed().as_millis() as u64,
            }
        };

        tracing::debug!(
            "Query {:?}: {} result(s) in {}ms",
            query,
            response.count,
            response.duration_ms
        );

        self.query = query.to_string();
        self.validity = response.validity;
        emit(&mut self.listeners, &SessionEvent::Results(&response));

        Ok(response)
    }

    /// Close the session: drop the cached index and reset the input.
    pub fn close(&mut self) {
        if self.documents.is_some() {
            tracing::debug!("Closing search session for {}", self.location);
        }

        self.documents = None;
        self.stats = None;
        self.opened_at = None;
        self.query.clear();
        self.validity = InputValidity::Neutral;

        emit(&mut self.listeners, &SessionEvent::Closed);
    }
}

fn emit(listeners: &mut [Listener], event: &SessionEvent<'_>) {
    for listener in listeners.iter_mut() {
        listener(event);
    }
}
