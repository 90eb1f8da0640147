//! File scanner for discovering documents under a root

use crate::error::Result;
use crate::root::ConfinedRoot;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A document file found by the scanner
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated
    pub relative_path: String,
}

/// Scanner collecting every file under a root whose path ends with a suffix
pub struct Scanner<'a> {
    /// Root directory to scan
    root: &'a ConfinedRoot,
    /// File name suffix, e.g. `.mdc`
    suffix: &'a str,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner
    pub fn new(root: &'a ConfinedRoot, suffix: &'a str) -> Self {
        Scanner { root, suffix }
    }

    /// Walk the whole tree.
    ///
    /// Any walk error aborts the scan. Symlinks are not followed; they are
    /// reported like files and validated by the root when read.
    pub fn scan(&self) -> Result<Vec<ScanResult>> {
        let mut results = Vec::new();

        for entry in WalkDir::new(self.root.path()).min_depth(1).follow_links(false) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let Some(relative_path) = self.root.relative_path(entry.path()) else {
                continue;
            };

            if !relative_path.ends_with(self.suffix) {
                continue;
            }

            tracing::debug!("Found document {}", relative_path);
            results.push(ScanResult {
                path: entry.into_path(),
                relative_path,
            });
        }

        Ok(results)
    }
}
