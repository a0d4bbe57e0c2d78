// src/checker/mod.rs
// =============================================================================
// This module contains the per-document link checking pipeline.
//
// Submodules:
// - markdown: Renders markdown text to HTML
// - html: Extracts every <a href> from the rendered HTML
// - http: Decides whether each reference is reachable
//
// Data flows markdown -> html -> http. Each stage only depends on the
// output of the previous one, which keeps them easy to test in isolation.
// =============================================================================

mod html;
mod http;
mod markdown;

// Re-export public items from submodules
// This lets users write `checker::check_links()` instead of
// `checker::http::check_links()`
pub use html::{extract_html_links, Reference};
pub use http::{
    check_links, is_network_url, url_scheme, validate_link, BrokenReason, HttpProbe, LinkStatus,
    Probe, DEFAULT_TIMEOUT,
};
pub use markdown::render_markdown;

use crate::discover::Document;

// Renders a document and pulls out its references, in document order
pub fn extract_references(document: &Document) -> Vec<Reference> {
    let html = render_markdown(&document.content);
    extract_html_links(&html, &document.display_path())
}
