// src/github/client.rs
// =============================================================================
// HTTP adapter for the upstream source-control API.
//
// Responsibilities:
// - Build request URLs from an explicit base URL (no global configuration)
// - Issue exactly one GET per call: no retries, no caching
// - Decode JSON bodies into the typed records in `model.rs`
// - Turn non-2xx answers into `UpstreamError`
//
// The "status text" in generic 4xx messages is the standard reason phrase
// for the code; reqwest does not expose the phrase sent on the wire. Codes
// without a standard phrase (e.g. 499) fall back to the bare number.
//
// Rust concepts:
// - Generic functions: `get_json<T>` decodes into whatever the caller asks for
// - DeserializeOwned: a bound meaning "can be built from JSON without borrowing"
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::error::{TransportError, UpstreamError};
use super::model::{Branch, Repository};

/// Root of the public hosting API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Sent on every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("repo-branches/", env!("CARGO_PKG_VERSION"));

/// Errors raised while setting the client up (never while using it).
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("could not build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Connection settings for [`GithubClient`], built once and passed in.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, ClientBuildError> {
        let parsed = Url::parse(base_url).map_err(|e| ClientBuildError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // Something like "mailto:x" parses but cannot take path segments
        if parsed.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            timeout,
            user_agent: user_agent.into(),
        })
    }
}

/// Reads repositories and branches from the upstream API.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, ClientBuildError> {
        // The public API refuses requests that carry no User-Agent
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    // GET /users/{username}/repos
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, UpstreamError> {
        self.get_json(&["users", username, "repos"]).await
    }

    // GET /repos/{username}/{repo_name}/branches
    pub async fn list_branches(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<Vec<Branch>, UpstreamError> {
        self.get_json(&["repos", username, repo_name, "branches"])
            .await
    }

    // Joins path segments onto the base URL.
    //
    // Each segment is percent-encoded, so a username can never add extra
    // path components or a query string.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base() was ruled out in UpstreamConfig::new
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // Performs one GET and classifies the response.
    //
    //   2xx -> decode body as T
    //   4xx -> UpstreamError::Client with the mapped message
    //   5xx -> TransportError::ServerStatus
    //   anything else (or no response at all) -> TransportError
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, UpstreamError> {
        let url = self.endpoint(segments);
        debug!(%url, "GET upstream");

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "upstream responded");

        if status.is_client_error() {
            let status_text = status.canonical_reason().unwrap_or(status.as_str());
            return Err(UpstreamError::client(status.as_u16(), status_text));
        }

        if status.is_server_error() {
            return Err(TransportError::ServerStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into());
        }

        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.json::<T>().await.map_err(TransportError::from)?;
        Ok(body)
    }
}
