//! Error types for control API operations.

/// Errors that can occur when interacting with the control API.
///
/// Every failure mode surfaces as one of these variants; transport errors
/// are wrapped rather than leaked, so callers have a single hierarchy to
/// match on.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid client construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The server rejected the request credentials (HTTP 401).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Application-level error reported inside a 200 response envelope.
    #[error("server returned error {code}: {message}")]
    Response {
        /// Server-defined numeric error code.
        code: i64,
        /// Human-readable error message from the server.
        message: String,
    },

    /// Any other non-2xx response status.
    #[error("{0}")]
    Server(String),

    /// Transport-level failure (connection refused, timeout, malformed
    /// response), wrapping the underlying cause.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize a command or deserialize a response body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
