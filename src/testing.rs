// src/testing.rs
// =============================================================================
// Shared test helpers (compiled only for `cargo test`).
//
// StubUpstream is a tiny axum server on a random loopback port that answers
// fixed routes with canned JSON, counting every request it serves.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::github::{GithubClient, UpstreamConfig};

pub struct StubUpstream {
    router: Router,
    hits: Arc<AtomicUsize>,
}

pub struct RunningStub {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn json(self, path: &str, status: u16, body: &'static str) -> Self {
        self.delayed(path, status, body, Duration::ZERO)
    }

    pub fn delayed(mut self, path: &str, status: u16, body: &'static str, delay: Duration) -> Self {
        let hits = self.hits.clone();
        let status = StatusCode::from_u16(status).unwrap();

        self.router = self.router.route(
            path,
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );
        self
    }

    pub async fn start(self) -> RunningStub {
        let base_url = serve(self.router).await;
        RunningStub {
            base_url,
            hits: self.hits,
        }
    }
}

// Serves `router` on 127.0.0.1:<random> and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> GithubClient {
    let config = UpstreamConfig::new(base_url, Duration::from_secs(5), "repo-branches-tests")
        .unwrap();
    GithubClient::new(config).unwrap()
}
