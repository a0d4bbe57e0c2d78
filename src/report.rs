// src/report.rs
// =============================================================================
// This module collects broken references and formats them for humans.
//
// The report keeps every broken occurrence, in discovery/extraction order,
// duplicates included. An empty report means the run succeeded.
//
// Three renderings are produced from the same data:
// - plain lines for stdout (one per broken link)
// - a two-column markdown table for the step summary and the PR comment
// - JSON, for anyone piping the result into another tool
// =============================================================================

use crate::checker::{BrokenReason, LinkStatus, Reference};
use serde::Serialize;
use std::collections::HashSet;

pub const SUMMARY_HEADING: &str = "## Broken Links Report\n";
pub const COMMENT_HEADING: &str = "## Markdown link validator action\n### Broken Links Found\n";
pub const NO_BROKEN_LINKS: &str = "No broken links found!";

const TABLE_HEADER: &str = "| File | Broken URL |\n|------|------------|\n";

// One unreachable reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    pub path: String,
    pub url: String,
    #[serde(flatten)]
    pub reason: BrokenReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrokenLinksReport {
    links: Vec<BrokenLink>,
}

impl BrokenLinksReport {
    pub fn new() -> Self {
        Self::default()
    }

    // Builds a report from validation outcomes, keeping only broken ones
    //
    // The outcomes must already be in discovery/extraction order; the report
    // never reorders what it is given.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (Reference, LinkStatus)>,
    {
        let mut report = Self::new();
        for (reference, status) in outcomes {
            report.record(reference, status);
        }
        report
    }

    pub fn record(&mut self, reference: Reference, status: LinkStatus) {
        if let LinkStatus::Broken(reason) = status {
            self.links.push(BrokenLink {
                path: reference.path,
                url: reference.url,
                reason,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    // (path, url) pairs in report order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links.iter().map(|l| (l.path.as_str(), l.url.as_str()))
    }

    // Number of distinct documents with at least one broken link
    pub fn document_count(&self) -> usize {
        self.links
            .iter()
            .map(|l| l.path.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

// Formats the report as a markdown table
//
// An empty report formats to an empty string, not a header-only table.
pub fn format_report(report: &BrokenLinksReport) -> String {
    if report.is_empty() {
        return String::new();
    }

    let mut table = String::from(TABLE_HEADER);
    for (path, url) in report.pairs() {
        table.push_str(&format!("| {} | {} |\n", path, url));
    }
    table
}

// Pretty-printed JSON view of the report
pub fn to_json(report: &BrokenLinksReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// The per-occurrence lines printed to stdout, in report order
pub fn stdout_lines(report: &BrokenLinksReport) -> Vec<String> {
    report
        .pairs()
        .map(|(path, url)| format!("File: {} | Broken URL: {}", path, url))
        .collect()
}

// The closing line printed after the per-link lines
pub fn summary_line(report: &BrokenLinksReport) -> String {
    if report.is_empty() {
        NO_BROKEN_LINKS.to_string()
    } else {
        format!(
            "{} broken link(s) found in {} document(s)",
            report.len(),
            report.document_count()
        )
    }
}

// What gets appended to the CI step summary
pub fn summary_markdown(report: &BrokenLinksReport) -> String {
    if report.is_empty() {
        format!("{}{}", SUMMARY_HEADING, NO_BROKEN_LINKS)
    } else {
        format!("{}{}", SUMMARY_HEADING, format_report(report))
    }
}

// What gets posted to the pull request, or None when there is nothing to say
pub fn comment_markdown(report: &BrokenLinksReport) -> Option<String> {
    if report.is_empty() {
        None
    } else {
        Some(format!("{}{}", COMMENT_HEADING, format_report(report)))
    }
}
