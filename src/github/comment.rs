// src/github/comment.rs
// =============================================================================
// Posts the broken links table as a comment on the pull request.
//
// Uses the issues comments endpoint of the GitHub REST API:
//   POST {api}/repos/{owner}/{repo}/issues/{number}/comments
//
// Commenting is best-effort. A failed request is reported back to the
// caller, who logs it; it never changes the exit code.
// =============================================================================

use crate::error::AuditError;
use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Everything needed to address one pull request thread
#[derive(Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub token: String,
}

// Keep the credential out of logs
impl fmt::Debug for ReviewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewTarget")
            .field("api_base", &self.api_base)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("number", &self.number)
            .field("token", &"***")
            .finish()
    }
}

impl ReviewTarget {
    // Builds the comments endpoint URL
    pub fn comments_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)
            .with_context(|| format!("invalid API base URL '{}'", self.api_base))?;
        let number = self.number.to_string();

        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL '{}' cannot have a path", self.api_base))?
            .pop_if_empty()
            .extend([
                "repos",
                self.owner.as_str(),
                self.repo.as_str(),
                "issues",
                number.as_str(),
                "comments",
            ]);

        Ok(url)
    }
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

pub struct PullRequestCommenter {
    client: Client,
    target: ReviewTarget,
}

impl PullRequestCommenter {
    pub fn new(target: ReviewTarget) -> Result<Self, AuditError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("markdown-link-validator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, target })
    }

    // Posts `body` as a new comment; only 201 Created counts as success
    pub async fn post_comment(&self, body: &str) -> Result<()> {
        let url = self.target.comments_url()?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.target.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(&CommentBody { body })
            .send()
            .await
            .context("sending review comment")?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        // The response text usually explains what went wrong (bad token, etc.)
        let text = response.text().await.unwrap_or_default();
        Err(anyhow!("Failed to post comment: {} - {}", status.as_u16(), text))
    }
}
