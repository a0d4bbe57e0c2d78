// src/checker/html.rs
// =============================================================================
// This module extracts outbound references from rendered HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Unlike a crawler we do NOT resolve, filter or normalize anything here.
// Every <a> carrying an href becomes a Reference with the href verbatim,
// duplicates included. Deciding what is worth probing is the validator's job.
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;

// One href occurrence in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Path of the document the link was found in
    pub path: String,
    /// The href exactly as it appears in the rendered anchor
    pub url: String,
}

// Extracts every anchor href from rendered HTML, in document order
//
// Parameters:
//   html: the rendered HTML fragment
//   path: the originating document path, copied into each Reference
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no href</a>"
//   result = [Reference { path, url: "/docs" }]
pub fn extract_html_links(html: &str, path: &str) -> Vec<Reference> {
    let fragment = Html::parse_fragment(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    // The selector is a constant, so failing to parse it is a programmer error
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    fragment
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| Reference {
            path: path.to_string(),
            url: href.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(refs: &[Reference]) -> Vec<&str> {
        refs.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_anchors_without_href_are_ignored() {
        let html = r##"
            <p><a href="https://one.example">1</a></p>
            <a name="top">anchor only</a>
            <a href="mailto:someone@example.com">2</a>
            <a>bare</a>
            <a href="#section">3</a>
        "##;
        let refs = extract_html_links(html, "./README.md");
        assert_eq!(
            urls(&refs),
            vec!["https://one.example", "mailto:someone@example.com", "#section"]
        );
        assert!(refs.iter().all(|r| r.path == "./README.md"));
    }

    #[test]
    fn test_href_is_not_normalized() {
        let html = r#"<a href="HTTPS://Example.COM/Path?q=1">x</a><a href="../docs/setup.md">y</a>"#;
        let refs = extract_html_links(html, "doc.md");
        assert_eq!(urls(&refs), vec!["HTTPS://Example.COM/Path?q=1", "../docs/setup.md"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let html = r#"<a href="https://a.example">a</a><a href="https://b.example">b</a><a href="https://a.example">a again</a>"#;
        let refs = extract_html_links(html, "doc.md");
        assert_eq!(
            urls(&refs),
            vec!["https://a.example", "https://b.example", "https://a.example"]
        );
    }

    #[test]
    fn test_empty_href_still_counts() {
        let refs = extract_html_links(r#"<a href="">empty</a>"#, "doc.md");
        assert_eq!(urls(&refs), vec![""]);
    }

    #[test]
    fn test_no_anchors() {
        assert!(extract_html_links("<p>nothing here</p>", "doc.md").is_empty());
    }
}
