//! Snippet extraction and keyword highlighting.
//!
//! Snippets are cut from markup-free content around the first
//! keyword's position. All positions here are counted in chars.

use once_cell::sync::Lazy;
use regex::{NoExpand, RegexBuilder};

static TAG_PATTERN: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"<[^>]+>").unwrap());

/// Characters kept before the anchor
pub const WINDOW_BEFORE: usize = 20;

/// Characters kept after the anchor
pub const WINDOW_AFTER: usize = 80;

/// Window end used whenever the window starts at the beginning of the content
pub const LEADING_WINDOW: usize = 100;

/// Marker appended to every snippet
pub const ELLIPSIS: &str = "...";

/// Remove every `<...>` tag from `html`.
pub fn strip_html(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Compute the `[start, end)` char window around `anchor` in content of
/// `len` chars.
///
/// A window that clamps to the start of the content always extends to
/// `LEADING_WINDOW` chars (or the content length, if shorter).
pub fn snippet_window(anchor: usize, len: usize) -> (usize, usize) {
    let start = anchor.saturating_sub(WINDOW_BEFORE);
    let mut end = anchor + WINDOW_AFTER;

    if start == 0 {
        end = LEADING_WINDOW;
    }

    let end = end.min(len);
    (start.min(end), end)
}

/// Wraps keyword occurrences in configurable markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    pre: String,
    post: String,
}

impl Highlighter {
    pub fn new(pre: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            pre: pre.into(),
            post: post.into(),
        }
    }

    /// Wrap every case-insensitive occurrence of each keyword.
    ///
    /// Keywords are applied one after another, so a later keyword can
    /// match inside markers inserted for an earlier one. The matched text
    /// is replaced by the (lowercase) keyword itself.
    pub fn highlight(&self, text: &str, keywords: &[String]) -> String {
        let mut result = text.to_string();

        for keyword in keywords {
            if keyword.is_empty() {
                continue;
            }

            let re = RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build();

            match re {
                Ok(re) => {
                    let wrapped = format!("{}{}{}", self.pre, keyword, self.post);
                    result = re.replace_all(&result, NoExpand(&wrapped)).into_owned();
                }
                Err(e) => {
                    tracing::debug!("Skipping highlight for {:?}: {}", keyword, e);
                }
            }
        }

        result
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new("<span class=\"search-word\">", "</span>")
    }
}

/// Cut the window around `anchor` out of `content`, highlight it and
/// append the ellipsis.
pub fn build_snippet(
    content: &str,
    anchor: usize,
    keywords: &[String],
    highlighter: &Highlighter,
) -> String {
    let len = content.chars().count();
    let (start, end) = snippet_window(anchor, len);

    let window: String = content.chars().skip(start).take(end - start).collect();
    let mut snippet = highlighter.highlight(&window, keywords);
    snippet.push_str(ELLIPSIS);
    snippet
}
