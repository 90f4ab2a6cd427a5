// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{blog_documents, TestIndex};
#[allow(unused_imports)]
pub use helpers::{create_memory_services, create_test_services, em_config};
