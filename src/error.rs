// src/error.rs
// =============================================================================
// Errors that abort a run.
//
// Only two things stop the pipeline early:
// - a markdown document that cannot be read or decoded as UTF-8
// - an HTTP client that cannot be built at all
//
// A link that fails its probe is NOT an error, it is a broken outcome and
// ends up in the report instead.
// =============================================================================

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    #[error("Error processing file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error processing file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl AuditError {
    /// The document that caused the failure, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AuditError::Read { path, .. } | AuditError::Decode { path, .. } => Some(path),
            AuditError::Client(_) => None,
        }
    }
}
