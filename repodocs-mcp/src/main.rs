//! repodocs MCP Server
//!
//! A Model Context Protocol (MCP) server that serves a directory of `.mdc`
//! documents to AI agents over stdio transport.
//!
//! ## Usage
//!
//! ```bash
//! # Serve documents from the current directory
//! repodocs-mcp
//!
//! # Serve a specific directory
//! repodocs-mcp --dir .cursor/rules
//!
//! # Enable verbose logging
//! repodocs-mcp --verbose
//! ```
//!
//! ## MCP Configuration
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "repodocs": {
//!       "command": "repodocs-mcp",
//!       "args": ["--dir", "/path/to/docs"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Available Tools
//!
//! - **list_documents**: Filenames and descriptions of all documents
//! - **get_document**: Body of a single document

use anyhow::{Context, Result};
use clap::Parser;
use repodocs::mcp::McpServer;
use repodocs::DocumentIndex;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// repodocs MCP Server - Expose a document directory via Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "repodocs-mcp")]
#[command(
    author,
    version,
    about = "repodocs MCP Server - Model Context Protocol interface for documents"
)]
struct Args {
    /// Directory containing the documents
    #[arg(long, short = 'd', env = "REPODOCS_DIR", default_value = ".")]
    dir: PathBuf,

    /// Enable verbose logging (outputs to stderr)
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Log directives: `--verbose` wins, then `RUST_LOG`, then warnings only.
/// Skipped documents are reported at `warn`, so that is the floor by default.
fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::new(filter_directives(
        args.verbose,
        std::env::var("RUST_LOG").ok(),
    ));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let index = DocumentIndex::build(&args.dir)
        .with_context(|| format!("Failed to index documents in {}", args.dir.display()))?;

    tracing::info!(
        "Starting repodocs MCP server for {} ({} documents)",
        index.root().path().display(),
        index.len()
    );

    let server = McpServer::new(index);
    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["repodocs-mcp", "--dir", "/tmp/docs"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("/tmp/docs"));
        assert!(!args.verbose);

        let args = Args::try_parse_from(["repodocs-mcp", "-d", "rules", "-v"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("rules"));
        assert!(args.verbose);
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(false, None), "warn");
        assert_eq!(filter_directives(false, Some("  ".to_string())), "warn");
        assert_eq!(filter_directives(false, Some("repodocs=info".to_string())), "repodocs=info");
        assert_eq!(filter_directives(true, Some("error".to_string())), "debug");
    }

    #[test]
    fn test_index_from_args() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("doc.mdc"), "---\ndescription: D\n---\nbody").unwrap();

        let args =
            Args::try_parse_from(["repodocs-mcp", "--dir", dir.path().to_str().unwrap()]).unwrap();
        let server = McpServer::new(DocumentIndex::build(&args.dir).unwrap());
        assert_eq!(server.index().len(), 1);
    }

    #[test]
    fn test_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(DocumentIndex::build(&missing).is_err());
    }
}
