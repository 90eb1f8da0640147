//! Confined access to the document directory
//!
//! Every read goes through [`ConfinedRoot::resolve`], which canonicalizes the
//! target and checks it still lives under the canonical root. Paths that
//! climb out with `..` or follow a symlink elsewhere are rejected.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a directory that all document access is confined to
#[derive(Debug, Clone)]
pub struct ConfinedRoot {
    /// Canonical absolute path of the root directory
    path: PathBuf,
}

impl ConfinedRoot {
    /// Resolve `path` to an absolute directory and open it as a root
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let absolute = std::path::absolute(path).map_err(|source| Error::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;

        let canonical = absolute.canonicalize().map_err(|source| Error::RootOpen {
            path: absolute.clone(),
            source,
        })?;

        let metadata = fs::metadata(&canonical).map_err(|source| Error::RootOpen {
            path: canonical.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(Error::RootOpen {
                path: canonical,
                source: std::io::Error::other("not a directory"),
            });
        }

        Ok(ConfinedRoot { path: canonical })
    }

    /// Canonical path of the root directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a root-relative path to a canonical path inside the root
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        if Path::new(relative).is_absolute() {
            return Err(Error::OutsideRoot(relative.to_string()));
        }

        let canonical = self
            .path
            .join(relative)
            .canonicalize()
            .map_err(|source| Error::Read {
                filename: relative.to_string(),
                source,
            })?;

        if !canonical.starts_with(&self.path) {
            return Err(Error::OutsideRoot(relative.to_string()));
        }

        Ok(canonical)
    }

    /// Read a root-relative file as text. Invalid UTF-8 is replaced, not rejected.
    pub fn read_to_string(&self, relative: &str) -> Result<String> {
        let path = self.resolve(relative)?;
        let bytes = fs::read(&path).map_err(|source| Error::Read {
            filename: relative.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Convert a path under the root into a `/`-separated relative path
    pub fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.path).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }
}
