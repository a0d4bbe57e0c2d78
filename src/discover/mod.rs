// src/discover/mod.rs
// =============================================================================
// This module finds the markdown documents we are going to audit.
//
// Features:
// - Recursive walk from a root directory, hidden directories included
// - No .gitignore filtering: every *.md file on disk is a candidate
// - Unreadable subdirectories are logged and skipped, not fatal
// - Loading a document is strict: bad UTF-8 aborts the whole run
// =============================================================================

mod document;
mod walk;

pub use document::Document;
pub use walk::list_markdown_files;
