// Matching and snippets over multi-byte content

use sitesearch::core::search::{tokenize, Highlighter, Matcher};
use sitesearch::Document;

fn matcher() -> Matcher {
    Matcher::new(false, Highlighter::new("<em>", "</em>"))
}

#[test]
fn test_accented_keyword() {
    let docs = vec![Document::new(
        "Café notes",
        "<p>The naïve approach works for small sites</p>",
        "/cafe/",
    )];

    let results = matcher().match_documents(&docs, &tokenize("NAÏVE"));

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].snippet.as_deref(),
        Some("The <em>naïve</em> approach works for small sites...")
    );
}

#[test]
fn test_window_counts_chars_not_bytes() {
    // 30 three-byte chars before the keyword
    let prefix = "検".repeat(30);
    let docs = vec![Document::new(
        "CJK",
        format!("{prefix}target{}", "索".repeat(100)),
        "/cjk/",
    )];

    let results = matcher().match_documents(&docs, &tokenize("target"));
    let snippet = results[0].snippet.as_deref().unwrap();

    let expected = format!("{}<em>target</em>{}...", "検".repeat(20), "索".repeat(74));
    assert_eq!(snippet, expected);
}

#[test]
fn test_emoji_content() {
    let docs = vec![Document::new(
        "Release 🎉",
        "🚀 shipped the search box 🔍 today",
        "/release/",
    )];

    let results = matcher().match_documents(&docs, &tokenize("search box"));

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].snippet.as_deref(),
        Some("🚀 shipped the <em>search</em> <em>box</em> 🔍 today...")
    );
}
