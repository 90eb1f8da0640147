//! In-memory document index
//!
//! Built once from a directory and never mutated afterwards. Only metadata
//! is kept in memory; bodies are read from disk on every [`DocumentIndex::get`].

use crate::error::{Error, Result};
use crate::parser::{parse, DocumentMetadata};
use crate::root::ConfinedRoot;
use crate::scanner::Scanner;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

/// File name suffix of document files
pub const DOCUMENT_SUFFIX: &str = ".mdc";

/// Entry returned by [`DocumentIndex::list`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Path relative to the root, `/`-separated
    pub filename: String,
    /// Description from the front matter, empty if absent
    pub description: String,
}

/// Index of the documents under a confined root
#[derive(Debug)]
pub struct DocumentIndex {
    root: ConfinedRoot,
    documents: BTreeMap<String, DocumentMetadata>,
}

impl DocumentIndex {
    /// Scan `root_path` and build the index.
    ///
    /// Fails if the path cannot be resolved, the root cannot be opened or the
    /// walk fails. A document that cannot be read is logged and left out.
    pub fn build<P: AsRef<Path>>(root_path: P) -> Result<Self> {
        let start = Instant::now();
        let root = ConfinedRoot::open(root_path)?;
        let files = Scanner::new(&root, DOCUMENT_SUFFIX).scan()?;

        let mut documents = BTreeMap::new();
        let mut skipped = 0usize;

        for file in files {
            let content = match root.read_to_string(&file.relative_path) {
                Ok(content) => content,
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping {}: {}", file.path.display(), e);
                    continue;
                }
            };

            let (mut meta, _) = parse(&content);
            meta.filename = file.relative_path.clone();
            documents.insert(file.relative_path, meta);
        }

        tracing::info!(
            "Indexed {} documents from {} ({} skipped) in {:?}",
            documents.len(),
            root.path().display(),
            skipped,
            start.elapsed()
        );

        Ok(DocumentIndex { root, documents })
    }

    /// Summaries of every indexed document, ordered by filename
    pub fn list(&self) -> Vec<DocumentSummary> {
        self.documents
            .values()
            .map(|meta| DocumentSummary {
                filename: meta.filename.clone(),
                description: meta.description.clone(),
            })
            .collect()
    }

    /// Read a document from disk and return its body without front matter
    pub fn get(&self, filename: &str) -> Result<String> {
        if !self.documents.contains_key(filename) {
            return Err(Error::DocumentNotFound(filename.to_string()));
        }

        let content = self.root.read_to_string(filename)?;
        let (_, body) = parse(&content);
        Ok(body.to_string())
    }

    /// Stored metadata for a document
    pub fn metadata(&self, filename: &str) -> Option<&DocumentMetadata> {
        self.documents.get(filename)
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were indexed
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Root the index was built from
    pub fn root(&self) -> &ConfinedRoot {
        &self.root
    }
}
