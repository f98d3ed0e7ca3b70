// src/github/source.rs
// =============================================================================
// The two reads the aggregator needs from upstream, as a trait.
//
// `GithubClient` is the real implementation; tests plug in in-memory fakes
// so the fan-out can be checked without a network.
// =============================================================================

use async_trait::async_trait;

use super::client::GithubClient;
use super::error::UpstreamError;
use super::model::{Branch, Repository};

#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Lists every repository of `username`, branches left empty.
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, UpstreamError>;

    /// Lists the branches of `username/repo_name` in upstream order.
    async fn list_branches(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<Vec<Branch>, UpstreamError>;
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, UpstreamError> {
        GithubClient::list_repositories(self, username).await
    }

    async fn list_branches(
        &self,
        username: &str,
        repo_name: &str,
    ) -> Result<Vec<Branch>, UpstreamError> {
        GithubClient::list_branches(self, username, repo_name).await
    }
}
