// src/checker/http.rs
// =============================================================================
// This module decides whether a single reference is reachable.
//
// Key functionality:
// - Classifies the href's scheme; only http/https ever touch the network
// - Makes one HTTP HEAD request (no body download), following redirects
// - Exactly HTTP 200 means reachable, everything else is broken
// - No retries: one transient failure is reported as broken
// - Runs checks through a bounded pool while keeping the input order
//
// The network call sits behind the `Probe` trait so the classification
// rules can be tested without a socket in sight.
// =============================================================================

use super::html::Reference;
use crate::error::AuditError;
use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Per-probe timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Redirect hops followed before a chain counts as a loop
const MAX_REDIRECTS: usize = 10;

// Why a reference was classified as broken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum BrokenReason {
    /// Final response was something other than 200
    Status { code: u16 },
    /// Request timed out
    Timeout,
    /// Could not resolve hostname
    DnsError,
    /// Host refused or dropped the connection
    ConnectionFailed,
    /// Too many redirects (redirect loop)
    TooManyRedirects,
    /// Anything else reqwest reported, including malformed URLs
    Error { message: String },
}

impl std::fmt::Display for BrokenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokenReason::Status { code } => write!(f, "HTTP {}", code),
            BrokenReason::Timeout => write!(f, "request timed out"),
            BrokenReason::DnsError => write!(f, "could not resolve hostname"),
            BrokenReason::ConnectionFailed => write!(f, "connection failed"),
            BrokenReason::TooManyRedirects => write!(f, "too many redirects"),
            BrokenReason::Error { message } => write!(f, "{}", message),
        }
    }
}

// The outcome of validating one reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    Reachable,
    Broken(BrokenReason),
}

impl LinkStatus {
    pub fn is_broken(&self) -> bool {
        matches!(self, LinkStatus::Broken(_))
    }
}

// A single HEAD-style probe of a URL
//
// Implementations return the final status code after redirects, or the
// reason the request never produced one.
pub trait Probe {
    fn head(&self, url: &str) -> impl Future<Output = Result<u16, BrokenReason>> + Send;
}

// The real network probe, backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, AuditError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("markdown-link-validator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    async fn head(&self, url: &str) -> Result<u16, BrokenReason> {
        match self.client.head(url).send().await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) => Err(categorize_error(&e)),
        }
    }
}

// Categorizes the different ways a reqwest request can fail
fn categorize_error(error: &reqwest::Error) -> BrokenReason {
    if error.is_timeout() {
        BrokenReason::Timeout
    } else if error.is_redirect() {
        BrokenReason::TooManyRedirects
    } else if error.is_connect() {
        // hyper only mentions DNS somewhere down the source chain. The
        // top-level message embeds the URL, so it is skipped.
        if source_chain_mentions(error, "dns") {
            BrokenReason::DnsError
        } else {
            BrokenReason::ConnectionFailed
        }
    } else {
        BrokenReason::Error {
            message: error.to_string(),
        }
    }
}

fn source_chain_mentions(error: &reqwest::Error, needle: &str) -> bool {
    use std::error::Error as _;

    let mut current = error.source();
    while let Some(err) = current {
        if err.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }
        current = err.source();
    }
    false
}

// Returns the lower-cased scheme of `href`, if it has one
//
// A scheme is a letter followed by letters, digits, '+', '-' or '.', ending
// at the first ':'. Relative paths and fragments have no scheme. Leading
// ASCII whitespace is skipped, as URL parsers skip it too.
pub fn url_scheme(href: &str) -> Option<String> {
    let href = href.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (scheme, _) = href.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
        return None;
    }
    Some(scheme.to_ascii_lowercase())
}

// Only http and https links are this tool's business
pub fn is_network_url(href: &str) -> bool {
    matches!(url_scheme(href).as_deref(), Some("http" | "https"))
}

// Validates one reference's URL
//
// Non-network schemes (mailto:, #fragment, ./relative.md, ...) are reachable
// without any probe. Network URLs are reachable only on a final HTTP 200.
pub async fn validate_link<P: Probe>(probe: &P, url: &str) -> LinkStatus {
    if !is_network_url(url) {
        return LinkStatus::Reachable;
    }

    match probe.head(url).await {
        Ok(code) if code == StatusCode::OK.as_u16() => LinkStatus::Reachable,
        Ok(code) => LinkStatus::Broken(BrokenReason::Status { code }),
        Err(reason) => LinkStatus::Broken(reason),
    }
}

// Checks many references through a pool of at most `concurrency` probes
//
// Results come back in the same order as `references`, no matter which
// probe finished first.
pub async fn check_links<P: Probe>(
    probe: &P,
    references: Vec<Reference>,
    concurrency: usize,
) -> Vec<(Reference, LinkStatus)> {
    let futures = references.into_iter().enumerate().map(|(index, reference)| async move {
        let status = validate_link(probe, &reference.url).await;
        debug!(path = %reference.path, url = %reference.url, ?status, "checked link");
        (index, reference, status)
    });

    // buffer_unordered hands results back as they complete, so we tag each
    // one with its position and sort afterwards
    let mut results: Vec<_> = stream::iter(futures)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    results.sort_by_key(|(index, _, _)| *index);

    results
        .into_iter()
        .map(|(_, reference, status)| (reference, status))
        .collect()
}
