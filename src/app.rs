// src/app.rs
// =============================================================================
// Wires the whole audit together.
//
// What happens here:
// 1. Discover every markdown file under the root
// 2. Load, render and extract references from each one (fatal on bad input)
// 3. Check every reference through the bounded probe pool
// 4. Collect the broken ones into a report, in discovery order
// 5. Hand the report to stdout, the step summary and the PR comment
// 6. Decide the exit code (0 = clean, 1 = broken links)
//
// Every document is read before any link is probed, so a broken document
// aborts the run before a single network request or report line.
// =============================================================================

use crate::checker::{self, HttpProbe, Probe, Reference};
use crate::config::Config;
use crate::discover::{list_markdown_files, Document};
use crate::error::AuditError;
use crate::github::{PullRequestCommenter, ReviewTarget};
use crate::report::{self, BrokenLinksReport};
use crate::summary::StepSummary;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const EXIT_OK: i32 = 0;
pub const EXIT_BROKEN: i32 = 1;

// Discovers, loads and extracts references from every document under `root`
//
// The first document that cannot be read or decoded stops everything.
pub fn collect_references(root: &Path) -> Result<Vec<Reference>, AuditError> {
    let files = list_markdown_files(root);
    info!(root = %root.display(), documents = files.len(), "discovered markdown files");

    let mut references = Vec::new();
    for path in &files {
        let document = Document::load(path)?;
        let found = checker::extract_references(&document);
        info!(path = %path.display(), links = found.len(), "extracted links");
        references.extend(found);
    }

    Ok(references)
}

// Runs discovery through aggregation and returns the broken links report
pub async fn audit<P: Probe>(
    probe: &P,
    root: &Path,
    concurrency: usize,
) -> Result<BrokenLinksReport, AuditError> {
    let references = collect_references(root)?;
    let total = references.len();

    let outcomes = checker::check_links(probe, references, concurrency).await;
    let report = BrokenLinksReport::from_outcomes(outcomes);

    info!(checked = total, broken = report.len(), "link check finished");
    Ok(report)
}

// Exit code for a finished report
pub fn exit_code(report: &BrokenLinksReport) -> i32 {
    if report.is_empty() {
        EXIT_OK
    } else {
        EXIT_BROKEN
    }
}

// Runs one full audit against the real network and publishes the result
pub async fn run(config: &Config) -> Result<i32, AuditError> {
    let probe = HttpProbe::new(config.timeout)?;
    let report = audit(&probe, &config.root, config.concurrency).await?;

    // Per-link lines go out before the summary file and the comment
    if !report.is_empty() {
        println!("Broken links found:");
        for line in report::stdout_lines(&report) {
            println!("{}", line);
        }
    }
    println!("{}", report::summary_line(&report));

    StepSummary::new(config.summary_path.clone()).append(&report::summary_markdown(&report));

    if let Some(path) = &config.json_output {
        if let Err(e) = write_json_report(path, &report) {
            warn!(error = %format!("{:#}", e), "could not write JSON report");
        }
    }

    if let (Some(target), Some(body)) = (&config.review, report::comment_markdown(&report)) {
        notify_pull_request(target.clone(), &body).await;
    }

    Ok(exit_code(&report))
}

fn write_json_report(path: &Path, report: &BrokenLinksReport) -> anyhow::Result<()> {
    let json = report::to_json(report)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// Best-effort review comment; failures are logged and swallowed
async fn notify_pull_request(target: ReviewTarget, body: &str) {
    let number = target.number;
    let commenter = match PullRequestCommenter::new(target) {
        Ok(commenter) => commenter,
        Err(e) => {
            warn!(error = %e, "could not set up review comment");
            return;
        }
    };

    match commenter.post_comment(body).await {
        Ok(()) => info!(pull_request = number, "Comment posted successfully."),
        Err(e) => warn!(pull_request = number, error = %format!("{:#}", e), "could not post review comment"),
    }
}
