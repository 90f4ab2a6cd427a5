// Integration tests for the search session lifecycle over a real index

use crate::common::{blog_documents, create_memory_services, create_test_services, em_config, TestIndex};
use sitesearch::{Document, IndexFormat, InputValidity, SiteSearchError};

#[tokio::test]
async fn test_open_input_close() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());
    let mut session = services.create_session();

    assert!(!session.is_ready());

    let stats = session.open().await.expect("Open failed");
    assert_eq!(stats.documents, 5);
    assert!(session.is_ready());
    assert!(session.opened_at().is_some());

    let response = session.input("test search").expect("Input failed");
    assert_eq!(response.count, 1);
    assert_eq!(response.keywords, vec!["test", "search"]);
    assert_eq!(response.validity, InputValidity::Valid);
    assert_eq!(
        response.results[0].snippet.as_deref(),
        Some("This is a <em>test</em> of <em>search</em>...")
    );
    assert_eq!(session.query(), "test search");

    session.close();
    assert!(!session.is_ready());
    assert!(session.documents().is_none());
    assert_eq!(session.query(), "");
    assert_eq!(session.validity(), InputValidity::Neutral);
}

#[tokio::test]
async fn test_input_before_open() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());
    let mut session = services.create_session();

    let err = session.input("search").unwrap_err();
    assert!(matches!(err, SiteSearchError::SessionNotReady));
}

#[tokio::test]
async fn test_input_after_close() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());
    let mut session = services.create_session();

    session.open().await.expect("Open failed");
    session.close();

    assert!(matches!(
        session.input("search"),
        Err(SiteSearchError::SessionNotReady)
    ));
}

#[tokio::test]
async fn test_validity_transitions() {
    let services = create_memory_services(em_config(), blog_documents());
    let mut session = services.create_session();
    session.open().await.expect("Open failed");

    assert_eq!(session.input("search").unwrap().validity, InputValidity::Valid);
    assert_eq!(session.validity(), InputValidity::Valid);

    assert_eq!(session.input("zzz").unwrap().validity, InputValidity::Invalid);
    assert_eq!(session.validity(), InputValidity::Invalid);

    let cleared = session.input("   ").unwrap();
    assert_eq!(cleared.validity, InputValidity::Neutral);
    assert!(cleared.results.is_empty());
    assert!(cleared.keywords.is_empty());
}

#[tokio::test]
async fn test_reopen_reloads_changed_index() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());
    let mut session = services.create_session();

    assert_eq!(session.open().await.unwrap().documents, 5);
    session.close();

    // Rewrite the export between sessions
    let updated = TestIndex::xml(&[Document::new("Only post", "fresh", "/only/")]);
    std::fs::copy(updated.path(), index.path()).unwrap();

    let stats = session.open().await.expect("Reopen failed");
    assert_eq!(stats.documents, 1);
    assert_eq!(session.input("fresh").unwrap().count, 1);
    assert_eq!(session.input("search").unwrap().count, 0);
}

#[tokio::test]
async fn test_open_twice_uses_cache() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());
    let mut session = services.create_session();

    session.open().await.expect("Open failed");
    std::fs::remove_file(index.path()).unwrap();

    // Still open, the cached documents are served
    let stats = session.open().await.expect("Cached open failed");
    assert_eq!(stats.documents, 5);
    assert_eq!(session.input("hello").unwrap().count, 1);
}

#[tokio::test]
async fn test_open_missing_index() {
    let index = TestIndex::raw("placeholder.xml", "");
    let missing = index.path().with_file_name("gone.xml");
    let services = create_test_services(&missing.to_string_lossy());
    let mut session = services.create_session();

    let err = session.open().await.unwrap_err();
    assert!(err.is_unavailable());
    assert!(!session.is_ready());
}

#[tokio::test]
async fn test_query_length_limit() {
    let mut config = em_config();
    config.search.max_query_length = 10;
    let services = create_memory_services(config, blog_documents());
    let mut session = services.create_session();
    session.open().await.expect("Open failed");

    assert!(session.input("0123456789").is_ok());

    let err = session.input("0123456789a").unwrap_err();
    assert!(err.is_bad_request());

    // The rejected input does not replace the previous one
    assert_eq!(session.query(), "0123456789");
}

#[tokio::test]
async fn test_include_content_in_search_from_config() {
    let mut config = em_config();
    config.search.include_content_in_search = true;
    let services = create_memory_services(config, blog_documents());
    let mut session = services.create_session();
    session.open().await.expect("Open failed");

    let response = session.input("tips").unwrap();
    assert_eq!(response.count, 0);
    assert_eq!(response.validity, InputValidity::Invalid);
}

#[tokio::test]
async fn test_stats_report_parsed_format() {
    let xml = TestIndex::xml(&blog_documents());
    let mut session = create_test_services(&xml.location()).create_session();
    assert_eq!(session.open().await.unwrap().format, Some(IndexFormat::Xml));

    let json = TestIndex::json(&blog_documents());
    let mut session = create_test_services(&json.location()).create_session();
    assert_eq!(session.open().await.unwrap().format, Some(IndexFormat::Json));

    let services = create_memory_services(em_config(), blog_documents());
    let mut session = services.create_session();
    assert_eq!(session.open().await.unwrap().format, None);
}
