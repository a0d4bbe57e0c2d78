// src/config.rs
// =============================================================================
// The single configuration value for a run.
//
// Built once from the parsed CLI (which already folded in the environment),
// then passed by reference to every component. Deep pipeline code never
// looks at process-wide state.
// =============================================================================

use crate::cli::Cli;
use crate::github::{pull_request_number, ReviewTarget};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for markdown files
    pub root: PathBuf,
    /// Size of the link checking pool, at least 1
    pub concurrency: usize,
    /// Per-probe timeout
    pub timeout: Duration,
    /// Where to write the JSON report, if anywhere
    pub json_output: Option<PathBuf>,
    /// Step summary destination, if the host provides one
    pub summary_path: Option<PathBuf>,
    /// Pull request to comment on; None disables commenting
    pub review: Option<ReviewTarget>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let review = resolve_review_target(&cli);

        Self {
            root: cli.root,
            concurrency: cli.concurrency.max(1),
            timeout: Duration::from_secs(cli.timeout_secs),
            json_output: cli.json_output,
            summary_path: cli.summary_file.filter(|p| !p.as_os_str().is_empty()),
            review,
        }
    }
}

// Empty environment variables count as unset
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// Works out whether this run can comment on a pull request
//
// All of these have to line up, otherwise commenting is switched off:
// - the ref is `refs/pull/<n>/merge`
// - the repository looks like `owner/name`
// - a token is available (PAT_TOKEN first, then GITHUB_TOKEN)
fn resolve_review_target(cli: &Cli) -> Option<ReviewTarget> {
    let Some(git_ref) = non_empty(&cli.git_ref) else {
        debug!("no git ref set, review comments disabled");
        return None;
    };
    let Some(number) = pull_request_number(git_ref) else {
        debug!(git_ref, "not a pull request ref, review comments disabled");
        return None;
    };

    let Some((owner, repo)) = non_empty(&cli.repository).and_then(split_repository) else {
        warn!(repository = ?cli.repository, "repository is not owner/name, review comments disabled");
        return None;
    };

    let Some(token) = non_empty(&cli.token).or_else(|| non_empty(&cli.fallback_token)) else {
        warn!("no token available, review comments disabled");
        return None;
    };

    Some(ReviewTarget {
        api_base: cli.api_url.trim().to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        number,
        token: token.to_string(),
    })
}

fn split_repository(repository: &str) -> Option<(&str, &str)> {
    let (owner, repo) = repository.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner, repo))
}
