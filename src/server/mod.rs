// src/server/mod.rs
// =============================================================================
// HTTP boundary: exposes the aggregation as a JSON endpoint.
//
//   GET /api/v1/github/{username}/repos
//
// Successful answers are the repositories as serialized by `github::model`
// (no `fork` field). Failures become `{ "statusCode": .., "message": .. }`.
// =============================================================================

pub(crate) mod error;
mod routes;

pub use routes::{create_router, run_server};
