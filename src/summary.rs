// src/summary.rs
// =============================================================================
// The CI step summary: an append-only markdown file provided by the host.
//
// Writing here is best-effort. No configured path means there is nothing to
// do, and a write failure is logged without changing the run's outcome.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct StepSummary {
    path: Option<PathBuf>,
}

impl StepSummary {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    // Appends `content`, logging instead of failing
    pub fn append(&self, content: &str) {
        let Some(path) = &self.path else {
            debug!("no step summary configured, skipping");
            return;
        };

        if let Err(e) = append_to(path, content) {
            warn!(error = %format!("{:#}", e), "could not write step summary");
        }
    }
}

fn append_to(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
