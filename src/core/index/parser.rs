//! Search index parsing.
//!
//! Understands the two layouts static-site generators export: the XML
//! feed (`<search><entry><title/><content/><url/></entry>...`) and a
//! JSON array of `{title, content, url}` objects. Entries missing a
//! field are kept with empty values and counted as malformed.

use crate::core::error::{Result, SiteSearchError};
use crate::core::types::{Document, IndexFormat, IndexStats};
use serde_json::Value;

/// Documents parsed from one index body
#[derive(Debug, Clone, Default)]
pub struct LoadedIndex {
    pub documents: Vec<Document>,

    /// Entries recovered with placeholder values
    pub malformed: usize,

    /// Format the body was parsed from, `None` for in-memory sets
    pub format: Option<IndexFormat>,
}

impl LoadedIndex {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            malformed: 0,
            format: None,
        }
    }

    /// Summarize the loaded documents
    pub fn stats(&self) -> IndexStats {
        let untitled = self
            .documents
            .iter()
            .filter(|d| d.title.trim().is_empty())
            .count();
        let empty_content = self
            .documents
            .iter()
            .filter(|d| crate::core::search::strip_html(d.content.trim()).trim().is_empty())
            .count();

        IndexStats {
            documents: self.documents.len(),
            untitled,
            empty_content,
            malformed: self.malformed,
            format: self.format,
        }
    }
}

/// Guess the format from the first non-blank character
pub fn detect_format(body: &str) -> IndexFormat {
    match body.trim_start_matches('\u{feff}').trim_start().chars().next() {
        Some('[') | Some('{') => IndexFormat::Json,
        _ => IndexFormat::Xml,
    }
}

/// Parse an index body in whichever format it is
pub fn parse_index(body: &str) -> Result<LoadedIndex> {
    match detect_format(body) {
        IndexFormat::Xml => parse_xml(body),
        IndexFormat::Json => parse_json(body),
    }
}

/// Parse the XML index layout
pub fn parse_xml(body: &str) -> Result<LoadedIndex> {
    let xml = roxmltree::Document::parse(body.trim_start_matches('\u{feff}'))
        .map_err(|e| SiteSearchError::IndexUnavailable(format!("Malformed XML index: {e}")))?;

    let mut index = LoadedIndex {
        format: Some(IndexFormat::Xml),
        ..LoadedIndex::default()
    };

    for entry in xml.descendants().filter(|n| n.has_tag_name("entry")) {
        let title = child_text(&entry, "title");
        let content = child_text(&entry, "content");
        let url = child_text(&entry, "url");

        let complete = title.is_some() && content.is_some() && url.is_some();
        if !complete {
            index.malformed += 1;
            tracing::debug!(
                "Entry #{} is missing fields (title: {}, content: {}, url: {})",
                index.documents.len(),
                title.is_some(),
                content.is_some(),
                url.is_some()
            );
        }

        index.documents.push(Document {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            url: url.unwrap_or_default(),
        });
    }

    Ok(index)
}

/// Concatenated text of the first descendant named `name`
fn child_text(entry: &roxmltree::Node, name: &str) -> Option<String> {
    entry
        .descendants()
        .skip(1)
        .find(|n| n.has_tag_name(name))
        .map(|node| {
            node.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect()
        })
}

/// Parse the JSON index layout
pub fn parse_json(body: &str) -> Result<LoadedIndex> {
    let entries: Vec<Value> = serde_json::from_str(body.trim_start_matches('\u{feff}'))
        .map_err(|e| SiteSearchError::IndexUnavailable(format!("Malformed JSON index: {e}")))?;

    let mut index = LoadedIndex {
        format: Some(IndexFormat::Json),
        ..LoadedIndex::default()
    };

    for (i, entry) in entries.iter().enumerate() {
        let title = string_field(entry, "title");
        let content = string_field(entry, "content");
        let url = string_field(entry, "url");

        if title.is_none() || content.is_none() || url.is_none() {
            index.malformed += 1;
            tracing::debug!("Entry #{i} is missing or has non-string fields");
        }

        index.documents.push(Document {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            url: url.unwrap_or_default(),
        });
    }

    Ok(index)
}

fn string_field(entry: &Value, name: &str) -> Option<String> {
    entry.get(name).and_then(Value::as_str).map(str::to_string)
}
