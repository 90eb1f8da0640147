//! # repodocs
//!
//! Serve a directory of `.mdc` documents to AI agents.
//!
//! repodocs provides:
//! - **Front-matter parsing** of `description` and `globs` keys
//! - **Document index** built once from a confined directory tree
//! - **MCP server** exposing `list_documents` and `get_document` over stdio
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use repodocs::DocumentIndex;
//!
//! let index = DocumentIndex::build(".cursor/rules").unwrap();
//!
//! for doc in index.list() {
//!     println!("{}: {}", doc.filename, doc.description);
//! }
//!
//! let body = index.get("go.mdc").unwrap();
//! ```

pub mod error;
pub mod index;
pub mod mcp;
pub mod parser;
pub mod root;
pub mod scanner;

// Re-exports for convenience
pub use error::{Error, Result};
pub use index::{DocumentIndex, DocumentSummary, DOCUMENT_SUFFIX};
pub use parser::{parse, DocumentMetadata};
pub use root::ConfinedRoot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
