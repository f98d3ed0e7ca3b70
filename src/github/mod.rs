// src/github/mod.rs
// =============================================================================
// This module talks to the upstream source-control hosting API.
//
// Submodules:
// - model:  typed records (Repository, Owner, Branch, CommitRef)
// - error:  the upstream error taxonomy and status -> message mapping
// - client: the reqwest-based HTTP adapter
// - source: the RepositorySource trait the aggregator is written against
//
// Out of scope here: pagination, authentication, caching, retries.
// =============================================================================

mod client;
mod error;
mod model;
mod source;

pub use client::{
    GithubClient, UpstreamConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use error::UpstreamError;
pub use model::Repository;
pub use source::RepositorySource;

// Only the tests build these outside the module
#[cfg(test)]
pub use error::TransportError;
#[cfg(test)]
pub use model::{Branch, CommitRef, Owner};
