// src/discover/document.rs
// =============================================================================
// A markdown document loaded from disk.
//
// Documents are read as raw bytes and then decoded as UTF-8. Anything that
// is not valid UTF-8 is a fatal error for the run (see error.rs).
// =============================================================================

use crate::error::AuditError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Document {
    /// Path exactly as discovery produced it, used verbatim in the report
    pub path: PathBuf,
    /// Raw markdown text
    pub content: String,
}

impl Document {
    // Reads and decodes a document
    pub fn load(path: &Path) -> Result<Self, AuditError> {
        let bytes = fs::read(path).map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8(bytes).map_err(|source| AuditError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    // The path as it appears in report rows
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
