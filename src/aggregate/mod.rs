// src/aggregate/mod.rs
// =============================================================================
// This module joins the two upstream reads into the final answer:
// every non-fork repository of a user, each with its full branch list.
//
// The branch lookups fan out concurrently; see repos.rs for how ordering and
// failures are handled.
// =============================================================================

mod repos;

pub use repos::{AggregateError, RepositoryAggregator};
