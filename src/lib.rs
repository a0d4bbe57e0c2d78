// src/lib.rs
// =============================================================================
// markdown-link-validator: audit a documentation tree for dead links.
//
// Pipeline: discover -> render -> extract -> validate -> report.
// The binary in main.rs only parses configuration and sets the exit code.
// =============================================================================

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod github;
pub mod report;
pub mod summary;

pub use app::{audit, collect_references, exit_code, run, EXIT_BROKEN, EXIT_OK};
pub use config::Config;
pub use error::AuditError;
pub use report::{format_report, BrokenLinksReport};
