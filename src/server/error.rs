// src/server/error.rs
// =============================================================================
// Fault boundary: turns an AggregateError into an HTTP response.
//
// Status code rules:
// - upstream 4xx            -> same status, mapped message
// - upstream timeout        -> 504 Gateway Timeout
// - any other transport err -> 502 Bad Gateway
// =============================================================================

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::AggregateError;

/// Error payload returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub status_code: u16,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError(pub AggregateError);

impl From<AggregateError> for ApiError {
    fn from(err: AggregateError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let upstream = self.0.upstream();
        if upstream.is_transport() {
            return if upstream.is_timeout() {
                StatusCode::GATEWAY_TIMEOUT
            } else {
                StatusCode::BAD_GATEWAY
            };
        }

        upstream
            .status_code()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY)
    }

    pub fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            status_code: self.status().as_u16(),
            message: self.0.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self.0, "request failed");
        (status, Json(self.to_message())).into_response()
    }
}
