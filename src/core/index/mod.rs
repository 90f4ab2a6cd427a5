//! Search index loading.
//!
//! The index is produced by the site build; this module only reads
//! it, from disk or over HTTP, and parses it into documents.

mod loader;
mod parser;

pub use loader::{is_remote, FileLoader, HttpLoader, IndexLoader, MemoryLoader, SourceLoader};
pub use parser::{detect_format, parse_index, parse_json, parse_xml, LoadedIndex};

pub use crate::core::types::IndexFormat;
