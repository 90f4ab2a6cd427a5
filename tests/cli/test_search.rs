//! Tests for the search CLI command
//!
//! - Queries with and without results
//! - Unavailable indexes
//! - Output format variations

use crate::common::{blog_documents, create_test_services, em_config, TestIndex};
use sitesearch::cli::commands::search::{execute, SearchArgs};
use sitesearch::cli::OutputFormat;

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        index: None,
        limit: None,
        urls_only: false,
    }
}

/// Test search with a query returning results
#[tokio::test]
async fn test_search_valid_query_human() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());

    let result = execute(args("search"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search in JSON format
#[tokio::test]
async fn test_search_valid_query_json() {
    let index = TestIndex::json(&blog_documents());
    let services = create_test_services(&index.location());

    let result = execute(args("async rust"), &services, OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

/// Test search with no matches
#[tokio::test]
async fn test_search_empty_results() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());

    let result = execute(args("kubernetes"), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "No matches is not an error");
}

/// Test search with a blank query
#[tokio::test]
async fn test_search_blank_query() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services(&index.location());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args("  "), &services, format).await;
        assert!(result.is_ok());
    }
}

/// Test the --index flag overriding the configured location
#[tokio::test]
async fn test_search_index_flag() {
    let index = TestIndex::xml(&blog_documents());
    let services = create_test_services("/nonexistent/local-search.xml");

    let mut search = args("hello");
    search.index = Some(index.location());
    search.limit = Some(1);
    search.urls_only = true;

    let result = execute(search, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Flag should win: {:?}", result.err());
}

/// Test search against a missing index
#[tokio::test]
async fn test_search_missing_index() {
    let services = create_test_services("/nonexistent/local-search.xml");

    let result = execute(args("search"), &services, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("unavailable"));
}

/// Test a query over the configured length limit
#[tokio::test]
async fn test_search_query_too_long() {
    let index = TestIndex::xml(&blog_documents());
    let mut config = em_config();
    config.index.location = index.location();
    config.search.max_query_length = 5;
    let services = std::sync::Arc::new(sitesearch::Services::new(config));

    let result = execute(args("longer than five"), &services, OutputFormat::Json).await;
    assert!(result.unwrap_err().to_string().contains("Invalid query"));
}
