//! Front-matter parser for document files
//!
//! A document may start with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! description: Rules for Go code
//! globs: *.go
//! ---
//! Body text...
//! ```
//!
//! Only `description` and `globs` are recognized. Anything malformed is
//! treated as "no metadata" and the input is returned untouched.

use serde::Serialize;

/// Metadata parsed from a document's front matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    /// Free-form summary of the document
    pub description: String,
    /// Pattern string, stored verbatim and never evaluated
    pub globs: String,
    /// Relative path of the document (set by the index, never by the parser)
    pub filename: String,
}

const DELIMITER: &str = "---";

/// Split `content` into its metadata and body.
///
/// The body borrows from `content`. Without a well-formed block (no opening
/// delimiter, or no closing one) the metadata is empty and the body is the
/// whole input.
pub fn parse(content: &str) -> (DocumentMetadata, &str) {
    let Some(first) = content.split_inclusive('\n').next() else {
        return (DocumentMetadata::default(), content);
    };

    // The opening fence has to be followed by at least one more line
    if !first.ends_with('\n') || !is_delimiter(first) {
        return (DocumentMetadata::default(), content);
    }

    let rest = &content[first.len()..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (parse_block(block), body);
        }
        offset += line.len();
    }

    (DocumentMetadata::default(), content)
}

/// Whether a line (with or without its terminator) is exactly `---`
fn is_delimiter(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line == DELIMITER
}

/// Parse `key: value` lines; later keys overwrite earlier ones
fn parse_block(block: &str) -> DocumentMetadata {
    let mut meta = DocumentMetadata::default();

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        match key.trim() {
            "description" => meta.description = value.trim().to_string(),
            "globs" => meta.globs = value.trim().to_string(),
            _ => {}
        }
    }

    meta
}
