//! Core data types for sitesearch.
//!
//! Documents come from the exported index, match results and
//! responses go to presenters.

use serde::{Deserialize, Serialize};

/// Title shown for documents whose title is blank or absent
pub const UNTITLED: &str = "Untitled";

/// A single searchable entry from the site index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Post title, may be blank
    #[serde(default)]
    pub title: String,

    /// Post body, may contain markup
    #[serde(default)]
    pub content: String,

    /// Link to the post
    #[serde(default)]
    pub url: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }

    /// Title as rendered: trimmed, or the untitled placeholder
    pub fn display_title(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            UNTITLED
        } else {
            trimmed
        }
    }
}

/// A document that matched every keyword of a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Display title (original case)
    pub title: String,

    /// Document URL, untouched
    pub url: String,

    /// Highlighted content window, `None` for title-only matches
    pub snippet: Option<String>,
}

/// Input state reported back to the search box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputValidity {
    /// No active query
    #[default]
    Neutral,
    /// Query produced at least one result
    Valid,
    /// Query produced no results
    Invalid,
}

/// Results of one input change, ready for a presenter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Raw query as typed
    pub query: String,

    /// Keywords derived from the query
    pub keywords: Vec<String>,

    /// Matches in index order
    pub results: Vec<MatchResult>,

    /// Number of matches
    pub count: usize,

    /// Validity flag for the input
    pub validity: InputValidity,

    /// Matching duration in milliseconds
    pub duration_ms: u64,
}

impl SearchResponse {
    /// Response for a query that trims to nothing
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            keywords: Vec::new(),
            results: Vec::new(),
            count: 0,
            validity: InputValidity::Neutral,
            duration_ms: 0,
        }
    }
}

/// Serialization of an index body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFormat {
    Xml,
    Json,
}

impl IndexFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexFormat::Xml => "xml",
            IndexFormat::Json => "json",
        }
    }
}

/// Summary of a loaded index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents
    pub documents: usize,

    /// Documents rendered as untitled
    pub untitled: usize,

    /// Documents with blank content after markup removal
    pub empty_content: usize,

    /// Entries that lacked one or more fields
    pub malformed: usize,

    /// Format the index was parsed from, `None` for in-memory sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<IndexFormat>,
}
