// src/checker/markdown.rs
// =============================================================================
// This module renders Markdown text to HTML.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Ships an HTML writer that turns those events into markup
//
// We only care that every link survives rendering as an <a href> element.
// Inline HTML written directly in the markdown is passed through untouched,
// so hand-written anchors are picked up too.
//
// The stock HTML writer percent-encodes link destinations (spaces, '|',
// non-ASCII). Link starts are therefore written as raw anchors carrying the
// destination exactly as written, with only HTML attribute escaping, which
// the HTML parser undoes on the way back out.
// =============================================================================

use pulldown_cmark::{html, Event, LinkType, Options, Parser, Tag};

// Renders one document's markdown to an HTML fragment
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org)!"
//
// Example output:
//   "<p>Check out <a href=\"https://www.rust-lang.org\">Rust</a>!</p>\n"
pub fn render_markdown(markdown: &str) -> String {
    // Tables are common in docs and links inside cells must still render
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        // The matching End(Tag::Link) still renders as "</a>"
        Event::Start(Tag::Link(link_type, dest_url, title)) => {
            Event::Html(raw_anchor(link_type, &dest_url, &title).into())
        }
        other => other,
    });

    // Rendered HTML is usually a bit longer than the source
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

// Opening <a> tag with the destination left as written
fn raw_anchor(link_type: LinkType, dest_url: &str, title: &str) -> String {
    let mut anchor = String::from("<a href=\"");
    // <someone@example.com> autolinks carry the bare address
    if link_type == LinkType::Email {
        anchor.push_str("mailto:");
    }
    anchor.push_str(&escape_attribute(dest_url));
    anchor.push('"');
    if !title.is_empty() {
        anchor.push_str(" title=\"");
        anchor.push_str(&escape_attribute(title));
        anchor.push('"');
    }
    anchor.push('>');
    anchor
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
