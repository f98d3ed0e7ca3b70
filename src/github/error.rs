// src/github/error.rs
// =============================================================================
// Errors produced while talking to the upstream API.
//
// Two kinds, kept apart on purpose:
// - Client:    upstream answered 4xx. We have a status code and a message
//              derived from it (see `status_message`).
// - Transport: anything where the upstream status is not meaningful to the
//              caller: connection refused, timeout, undecodable body, 5xx.
// =============================================================================

use thiserror::Error;

/// Failure of a single upstream call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream rejected the request with a 4xx status.
    #[error("{message} (HTTP {status})")]
    Client { status: u16, message: String },

    /// The request never produced a usable answer.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Reasons an upstream call failed below the 4xx taxonomy.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connect failure, timeout, or a body that did not decode.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered 5xx.
    #[error("upstream server error: HTTP {status} {reason}")]
    ServerStatus { status: u16, reason: String },

    /// A status that is neither success, 4xx nor 5xx (e.g. an unfollowed 3xx).
    #[error("unexpected upstream status: HTTP {status}")]
    UnexpectedStatus { status: u16 },
}

impl UpstreamError {
    /// Builds the 4xx variant with the mapped message.
    pub fn client(status: u16, status_text: &str) -> Self {
        UpstreamError::Client {
            status,
            message: status_message(status, status_text),
        }
    }

    /// The 4xx status upstream returned, if this is a client error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UpstreamError::Client { status, .. } => Some(*status),
            UpstreamError::Transport(_) => None,
        }
    }

    /// Human message for the boundary.
    pub fn message(&self) -> String {
        match self {
            UpstreamError::Client { message, .. } => message.clone(),
            UpstreamError::Transport(e) => e.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, UpstreamError::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            UpstreamError::Transport(TransportError::Request(e)) if e.is_timeout()
        )
    }
}

// Maps an upstream 4xx status to the message shown to users.
//
// Kept free of any error type so both call sites (repository listing and
// branch listing) share one table.
pub fn status_message(status: u16, status_text: &str) -> String {
    match status {
        404 => "User not found".to_string(),
        403 => "Github API rate limit exceeded".to_string(),
        _ => format!("Github client error: {}", status_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_not_found() {
        assert_eq!(status_message(404, "Not Found"), "User not found");
    }

    #[test]
    fn test_status_message_rate_limit() {
        assert_eq!(
            status_message(403, "Forbidden"),
            "Github API rate limit exceeded"
        );
    }

    #[test]
    fn test_status_message_other_client_errors() {
        assert_eq!(
            status_message(422, "Unprocessable Entity"),
            "Github client error: Unprocessable Entity"
        );
        assert_eq!(
            status_message(401, "Unauthorized"),
            "Github client error: Unauthorized"
        );
    }

    #[test]
    fn test_client_error_carries_status_and_message() {
        let err = UpstreamError::client(404, "Not Found");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.message(), "User not found");
        assert!(!err.is_transport());
        assert!(err.to_string().contains("User not found"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_server_status_is_transport() {
        let err = UpstreamError::from(TransportError::ServerStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        });
        assert!(err.is_transport());
        assert!(!err.is_timeout());
        assert_eq!(err.status_code(), None);
        assert!(err.message().contains("503"));
    }
}
