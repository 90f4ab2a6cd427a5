//! Query tokenization.
//!
//! A query becomes an ordered list of lowercase keywords. Order
//! matters: the first keyword anchors the snippet window.

use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace and hyphens both separate keywords
static SEPARATOR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").unwrap());

/// Split a raw query into lowercase keywords.
///
/// Returns an empty vector when the query trims to nothing; callers
/// treat that as "no active query". Duplicates are kept.
///
/// # Examples
///
/// ```
/// use sitesearch::core::search::tokenize;
///
/// assert_eq!(tokenize("  Rust  Async-Await "), vec!["rust", "async", "await"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let lowered = trimmed.to_lowercase();
    SEPARATOR_PATTERN
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
