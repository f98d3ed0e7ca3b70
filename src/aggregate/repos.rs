// src/aggregate/repos.rs
// =============================================================================
// Fetch-and-aggregate for one username.
//
// How it works:
// 1. List the user's repositories (one upstream call)
// 2. Drop forks, keeping upstream order
// 3. Fetch the branches of every remaining repository concurrently
// 4. Return the repositories, branches attached, in the order of step 2
//
// Ordering and failures:
// - The branch lookups run through `buffered(n)`, which polls up to n futures
//   at once but yields results in input order. Completion order never leaks
//   into the output.
// - `try_collect` stops at the first `Err` it sees in that order, so the error
//   surfaced is always the one from the lowest-positioned failing repository.
//   Returning drops the stream, which drops (cancels) every fetch still in
//   flight.
// - Nothing is spawned: if the caller drops the returned future, all
//   outstanding lookups go with it.
// =============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;
use tracing::debug;

use crate::github::{Repository, RepositorySource, UpstreamError};

/// Why an aggregation failed. Always wraps the upstream error untouched.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The repository listing itself failed.
    #[error(transparent)]
    Listing(UpstreamError),

    /// A branch lookup failed; the whole result is discarded.
    #[error("fetching branches of '{repository}' failed: {source}")]
    Branches {
        repository: String,
        #[source]
        source: UpstreamError,
    },
}

impl AggregateError {
    /// The upstream failure behind this error.
    pub fn upstream(&self) -> &UpstreamError {
        match self {
            AggregateError::Listing(e) => e,
            AggregateError::Branches { source, .. } => source,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.upstream().status_code()
    }

    pub fn message(&self) -> String {
        self.upstream().message()
    }
}

/// Builds the "non-fork repositories with branches" view for a user.
pub struct RepositoryAggregator<S> {
    source: S,
    max_concurrency: Option<usize>,
}

impl<S: RepositorySource> RepositoryAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_concurrency: None,
        }
    }

    /// Caps how many branch lookups may be in flight at once.
    ///
    /// Without a cap every non-fork repository is fetched at the same time.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.map(|n| n.max(1));
        self
    }

    pub async fn get_all_repos(&self, username: &str) -> Result<Vec<Repository>, AggregateError> {
        let repos = self
            .source
            .list_repositories(username)
            .await
            .map_err(AggregateError::Listing)?;

        let total = repos.len();
        let candidates: Vec<Repository> = repos.into_iter().filter(|repo| !repo.fork).collect();
        debug!(username, total, non_fork = candidates.len(), "fetching branches");

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let limit = self.max_concurrency.unwrap_or(candidates.len());
        let fetches = candidates
            .into_iter()
            .map(|repo| self.attach_branches(username, repo));

        stream::iter(fetches).buffered(limit).try_collect().await
    }

    async fn attach_branches(
        &self,
        username: &str,
        repo: Repository,
    ) -> Result<Repository, AggregateError> {
        match self.source.list_branches(username, &repo.name).await {
            Ok(branches) => Ok(repo.with_branches(branches)),
            Err(source) => Err(AggregateError::Branches {
                repository: repo.name,
                source,
            }),
        }
    }
}
