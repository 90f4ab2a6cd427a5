//! Local substring search.
//!
//! Tokenizes queries, filters documents that contain every keyword
//! and cuts highlighted snippets out of their content.

mod matcher;
mod snippet;
mod tokenizer;

pub use matcher::{match_documents, Matcher};
pub use snippet::{build_snippet, snippet_window, strip_html, Highlighter, ELLIPSIS};
pub use tokenizer::tokenize;
