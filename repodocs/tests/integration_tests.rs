//! Integration tests for the document index
//!
//! These tests verify end-to-end behavior including:
//! - Recursive scanning and suffix filtering
//! - Front-matter extraction into summaries
//! - Body retrieval and error kinds

use repodocs::{DocumentIndex, DocumentSummary, Error};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

const DOC1: &str = "---
description: First document
globs: *.go
---
This is the first document content.";

const DOC2: &str = "---
description: Second document
globs: *.md
---
This is the second document content.";

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Create a directory with two documents and one non-document file
fn setup_document_dir() -> TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), "doc1.mdc", DOC1);
    write(dir.path(), "nested/deeper/doc2.mdc", DOC2);
    write(dir.path(), "notadoc.txt", "This is not a document file.");
    write(dir.path(), "nested/readme.md", "# Not a document either");
    dir
}

#[test]
fn test_build_counts_only_documents() {
    let dir = setup_document_dir();
    let index = DocumentIndex::build(dir.path()).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.list().len(), 2);
}

#[test]
fn test_list_documents() {
    let dir = setup_document_dir();
    let index = DocumentIndex::build(dir.path()).unwrap();

    let mut docs = index.list();
    docs.sort_by(|a, b| a.filename.cmp(&b.filename));

    assert_eq!(
        docs,
        vec![
            DocumentSummary {
                filename: "doc1.mdc".to_string(),
                description: "First document".to_string(),
            },
            DocumentSummary {
                filename: "nested/deeper/doc2.mdc".to_string(),
                description: "Second document".to_string(),
            },
        ]
    );
}

#[test]
fn test_list_serializes_to_expected_json() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.mdc", "---\ndescription: A\nglobs: *.go\n---\nBODY A");
    write(dir.path(), "b.txt", "whatever");

    let index = DocumentIndex::build(dir.path()).unwrap();
    let json = serde_json::to_value(index.list()).unwrap();

    assert_eq!(json, serde_json::json!([{"filename": "a.mdc", "description": "A"}]));
    assert_eq!(index.get("a.mdc").unwrap(), "BODY A");
    assert!(matches!(index.get("b.mdc"), Err(Error::DocumentNotFound(_))));
}

#[test]
fn test_get_document() {
    let dir = setup_document_dir();
    let index = DocumentIndex::build(dir.path()).unwrap();

    assert_eq!(
        index.get("doc1.mdc").unwrap(),
        "This is the first document content."
    );
    assert_eq!(
        index.get("nested/deeper/doc2.mdc").unwrap(),
        "This is the second document content."
    );
    assert!(index.get("nonexistent.mdc").unwrap_err().is_not_found());
    assert!(index.get("notadoc.txt").unwrap_err().is_not_found());
}

#[test]
fn test_get_does_not_escape_root() {
    let outer = tempdir().unwrap();
    write(outer.path(), "secret.mdc", "secret");
    write(outer.path(), "docs/doc.mdc", "doc");

    let index = DocumentIndex::build(outer.path().join("docs")).unwrap();
    assert!(index.get("../secret.mdc").unwrap_err().is_not_found());
}

#[test]
fn test_relative_root_path() {
    let dir = setup_document_dir();
    let cwd = std::env::current_dir().unwrap();
    let relative = pathdiff(dir.path(), &cwd);

    let index = DocumentIndex::build(&relative).unwrap();
    assert!(index.root().path().is_absolute());
    assert_eq!(index.len(), 2);
}

/// Express `path` relative to `base` using `..` segments
fn pathdiff(path: &Path, base: &Path) -> std::path::PathBuf {
    let path = path.canonicalize().unwrap();
    let base = base.canonicalize().unwrap();
    let common = path
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = std::path::PathBuf::new();
    for _ in base.components().skip(common) {
        result.push("..");
    }
    for component in path.components().skip(common) {
        result.push(component);
    }
    result
}

#[test]
fn test_nonexistent_directory() {
    let dir = tempdir().unwrap();
    let result = DocumentIndex::build(dir.path().join("nonexistent-dir"));
    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_unreadable_document_among_readable_ones() {
    let outer = tempdir().unwrap();
    let docs = outer.path().join("docs");
    write(&docs, "doc1.mdc", DOC1);
    write(&docs, "doc2.mdc", DOC2);
    write(outer.path(), "elsewhere.mdc", "outside the root");
    std::os::unix::fs::symlink(outer.path().join("elsewhere.mdc"), docs.join("bad.mdc")).unwrap();

    let index = DocumentIndex::build(&docs).unwrap();

    let mut names: Vec<String> = index.list().into_iter().map(|d| d.filename).collect();
    names.sort();
    assert_eq!(names, vec!["doc1.mdc", "doc2.mdc"]);
}

#[test]
fn test_concurrent_queries() {
    let dir = setup_document_dir();
    let index = Arc::new(DocumentIndex::build(dir.path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let index = Arc::clone(&index);
            std::thread::spawn(move || {
                let name = if i % 2 == 0 { "doc1.mdc" } else { "nested/deeper/doc2.mdc" };
                let body = index.get(name).unwrap();
                assert!(body.ends_with("document content."));
                assert_eq!(index.list().len(), 2);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
