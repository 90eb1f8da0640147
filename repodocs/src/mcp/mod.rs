//! MCP (Model Context Protocol) server for repodocs
//!
//! This module implements an MCP server using stdio transport, exposing
//! the document index to AI agents.
//!
//! ## Tools Exposed
//!
//! - `list_documents` - Filenames and descriptions of all indexed documents
//! - `get_document` - Body of one document, front matter stripped
//!
//! ## Usage
//!
//! ```rust,ignore
//! use repodocs::{mcp::McpServer, DocumentIndex};
//!
//! #[tokio::main]
//! async fn main() {
//!     let index = DocumentIndex::build(".").unwrap();
//!     McpServer::new(index).run().await.unwrap();
//! }
//! ```

mod protocol;
mod server;
pub mod tools;

pub use protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolContent, ToolDefinition, ToolResult,
    MCP_PROTOCOL_VERSION,
};
pub use server::McpServer;
