//! Keyword matching over an in-memory document set.
//!
//! A document matches when every keyword occurs in its title or in its
//! markup-free content. Results keep the input order; there is no
//! ranking beyond the filter.

use crate::core::config::SearchConfig;
use crate::core::search::snippet::{build_snippet, strip_html, Highlighter};
use crate::core::types::{Document, MatchResult};

/// Substring matcher with snippet highlighting
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    include_content_in_search: bool,
    highlighter: Highlighter,
}

impl Matcher {
    /// Create a matcher
    ///
    /// With `include_content_in_search` set, documents without content
    /// never match, even when the title carries every keyword.
    pub fn new(include_content_in_search: bool, highlighter: Highlighter) -> Self {
        Self {
            include_content_in_search,
            highlighter,
        }
    }

    /// Create a matcher from the search section of the configuration
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            config.include_content_in_search,
            Highlighter::new(
                config.highlight_pre.clone(),
                config.highlight_post.clone(),
            ),
        )
    }

    /// Match `documents` against `keywords`, preserving document order.
    ///
    /// An empty keyword list yields no results.
    pub fn match_documents(&self, documents: &[Document], keywords: &[String]) -> Vec<MatchResult> {
        if keywords.is_empty() {
            return Vec::new();
        }

        let results: Vec<MatchResult> = documents
            .iter()
            .filter_map(|doc| self.match_document(doc, keywords))
            .collect();

        tracing::trace!(
            "Matched {} of {} documents for {:?}",
            results.len(),
            documents.len(),
            keywords
        );

        results
    }

    /// Match a single document, `None` if any keyword is missing.
    pub fn match_document(&self, doc: &Document, keywords: &[String]) -> Option<MatchResult> {
        if keywords.is_empty() {
            return None;
        }

        let title = doc.display_title();
        let content = strip_html(doc.content.trim());

        if self.include_content_in_search && content.trim().is_empty() {
            return None;
        }

        let lower_title = title.to_lowercase();
        let lower_content = content.to_lowercase();

        let mut anchor = 0;
        let mut found_in_content = false;

        for (i, keyword) in keywords.iter().enumerate() {
            let in_title = lower_title.contains(keyword.as_str());
            let content_index = char_index_of(&lower_content, keyword);

            if !in_title && content_index.is_none() {
                return None;
            }

            found_in_content |= content_index.is_some();

            // Only the first keyword anchors the window; title-only anchors at 0
            if i == 0 {
                anchor = content_index.unwrap_or(0);
            }
        }

        let snippet = found_in_content
            .then(|| build_snippet(&content, anchor, keywords, &self.highlighter));

        Some(MatchResult {
            title: title.to_string(),
            url: doc.url.clone(),
            snippet,
        })
    }
}

/// Match with default settings.
pub fn match_documents(documents: &[Document], keywords: &[String]) -> Vec<MatchResult> {
    Matcher::default().match_documents(documents, keywords)
}

/// Char position of the first occurrence of `needle` in `haystack`.
fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}
