// Integration tests for malformed and unusual index bodies

use crate::common::TestIndex;
use sitesearch::core::index::{IndexLoader, SourceLoader};

#[tokio::test]
async fn test_entry_missing_url_is_kept() {
    let index = TestIndex::raw(
        "local-search.xml",
        r#"<?xml version="1.0" encoding="utf-8"?>
<search>
  <entry>
    <title>No link</title>
    <content type="html"><![CDATA[<p>orphaned post</p>]]></content>
  </entry>
  <entry>
    <title>Complete</title>
    <content type="html"><![CDATA[<p>fine</p>]]></content>
    <url>/complete/</url>
  </entry>
</search>"#,
    );

    let loaded = SourceLoader::default()
        .load(&index.location())
        .await
        .expect("Load failed");

    assert_eq!(loaded.documents.len(), 2);
    assert_eq!(loaded.malformed, 1);
    assert_eq!(loaded.documents[0].url, "");
    assert_eq!(loaded.documents[1].url, "/complete/");
}

#[tokio::test]
async fn test_truncated_xml_is_unavailable() {
    let index = TestIndex::raw("local-search.xml", "<search><entry><title>Cut");

    let err = SourceLoader::default()
        .load(&index.location())
        .await
        .unwrap_err();

    assert!(err.is_unavailable());
    assert!(err.to_string().contains("Malformed XML"));
}

#[tokio::test]
async fn test_json_with_wrong_field_types() {
    let index = TestIndex::raw(
        "search.json",
        r#"[
            {"title": "Good", "content": "body", "url": "/good/"},
            {"title": 42, "content": "numbers", "url": "/bad/"}
        ]"#,
    );

    let loaded = SourceLoader::default()
        .load(&index.location())
        .await
        .expect("Load failed");

    assert_eq!(loaded.documents.len(), 2);
    assert_eq!(loaded.malformed, 1);
    assert_eq!(loaded.documents[1].title, "");
    assert_eq!(loaded.documents[1].display_title(), "Untitled");
}

#[tokio::test]
async fn test_empty_search_element() {
    let index = TestIndex::raw("local-search.xml", "<search></search>");

    let loaded = SourceLoader::default()
        .load(&index.location())
        .await
        .expect("Load failed");

    assert!(loaded.documents.is_empty());
    assert_eq!(loaded.stats().documents, 0);
}
