// Test fixtures for integration testing

use sitesearch::Document;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small blog, in index order
#[allow(dead_code)] // Used in integration tests
pub fn blog_documents() -> Vec<Document> {
    vec![
        Document::new(
            "Hello World",
            "<p>This is a test of search</p>",
            "/2024/01/hello-world/",
        ),
        Document::new("Other", "nothing relevant", "/2024/02/other/"),
        Document::new(
            "Async Rust in Practice",
            "<h2>Intro</h2><p>Futures, executors and the <code>async</code> keyword. \
             Search for patterns that keep tasks small.</p>",
            "/2024/03/async-rust/",
        ),
        Document::new("", "<p>Draft notes about dark-mode toggles</p>", "/drafts/1/"),
        Document::new("Search Tips", "", "/2024/04/search-tips/"),
    ]
}

/// Escape text for an XML text node
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Search index written to a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct TestIndex {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestIndex {
    /// Write `docs` in the XML export layout
    #[allow(dead_code)]
    pub fn xml(docs: &[Document]) -> Self {
        let mut body = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<search>\n");
        for doc in docs {
            body.push_str("  <entry>\n");
            body.push_str(&format!("    <title>{}</title>\n", xml_escape(&doc.title)));
            body.push_str(&format!("    <link href=\"{}\"/>\n", xml_escape(&doc.url)));
            body.push_str(&format!("    <url>{}</url>\n", xml_escape(&doc.url)));
            body.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                doc.content
            ));
            body.push_str("  </entry>\n");
        }
        body.push_str("</search>\n");
        Self::raw("local-search.xml", &body)
    }

    /// Write `docs` as a JSON array
    #[allow(dead_code)]
    pub fn json(docs: &[Document]) -> Self {
        let body = serde_json::to_string(docs).unwrap();
        Self::raw("search.json", &body)
    }

    /// Write an arbitrary body
    pub fn raw(name: &str, body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        Self { dir, path }
    }

    /// Location string for the index
    #[allow(dead_code)]
    pub fn location(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
