// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Running the binary with no arguments at all is the normal CI usage: it
// scans the current directory and reads everything else from the
// environment variables GitHub Actions provides. The flags exist so the
// same settings can be given explicitly when running locally.
//
// Nothing outside this file and config.rs reads the environment.
// =============================================================================

use crate::checker::DEFAULT_TIMEOUT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "markdown-link-validator",
    version,
    about = "Scan a documentation tree for dead links in markdown files",
    long_about = "markdown-link-validator renders every *.md file under a directory, \
                  checks each http(s) link with a HEAD request, and reports the broken ones \
                  to stdout, the CI step summary and, for pull requests, a review comment."
)]
pub struct Cli {
    /// Directory to scan for markdown files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Maximum number of links checked at the same time
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Seconds to wait for each link before calling it broken
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Also write the broken links report as JSON to this file
    #[arg(long = "json-output")]
    pub json_output: Option<PathBuf>,

    /// Markdown file the report is appended to
    #[arg(long = "summary-file", env = "GITHUB_STEP_SUMMARY")]
    pub summary_file: Option<PathBuf>,

    /// Fully-formed git ref of the run, e.g. refs/pull/42/merge
    #[arg(long = "git-ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// Repository in owner/name form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Token used to comment on the pull request
    #[arg(long, env = "PAT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Token used when no personal access token is set
    #[arg(long = "fallback-token", env = "GITHUB_TOKEN", hide_env_values = true, hide = true)]
    pub fallback_token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "markdown-link-validator",
            "--root",
            "docs",
            "--concurrency",
            "3",
            "--timeout-secs",
            "2",
            "--git-ref",
            "refs/pull/5/merge",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("docs"));
        assert_eq!(cli.concurrency, 3);
        assert_eq!(cli.timeout_secs, 2);
        assert_eq!(cli.git_ref.as_deref(), Some("refs/pull/5/merge"));
        assert_eq!(cli.api_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["markdown-link-validator"]).unwrap();

        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.concurrency, 8);
        assert_eq!(cli.timeout_secs, DEFAULT_TIMEOUT.as_secs());
        assert!(cli.json_output.is_none());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["markdown-link-validator", "extra"]).is_err());
    }
}
