// src/server/routes.rs
// =============================================================================
// Route table and listener for the HTTP boundary.
//
// - create_router: wires the aggregator into an axum Router as shared state
// - run_server:    binds the address and serves until the process stops
//
// Handlers stay thin: they call the aggregator and let ApiError render
// failures.
// =============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::ApiError;
use crate::aggregate::RepositoryAggregator;
use crate::github::{Repository, RepositorySource};

pub fn create_router<S: RepositorySource + 'static>(
    aggregator: Arc<RepositoryAggregator<S>>,
) -> Router {
    Router::new()
        .route("/api/v1/github/:username/repos", get(list_user_repos::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator)
}

async fn list_user_repos<S: RepositorySource + 'static>(
    State(aggregator): State<Arc<RepositoryAggregator<S>>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let repos = aggregator.get_all_repos(&username).await?;
    Ok(Json(repos))
}

pub async fn run_server(app: Router, bind: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
