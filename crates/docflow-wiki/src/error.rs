//! Error types for the Wiki.js integration.

/// Error from Wiki.js API operations.
///
/// Each variant corresponds to one response shape of the GraphQL endpoint,
/// so callers can match on the failure class instead of probing nested JSON.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Wiki base URL or API token missing from configuration.
    #[error("Wiki.js URL or API token not configured")]
    NotConfigured,

    /// Server unreachable (DNS failure, refused connection, timeout).
    #[error("connection error: {0}")]
    Connection(String),

    /// Authentication rejected (HTTP 401): invalid API token.
    #[error("authentication error: invalid API token")]
    AuthFailed,

    /// Malformed request (HTTP 400).
    #[error("bad request: check the Wiki.js URL and API token")]
    BadRequest,

    /// Any other HTTP error status.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// GraphQL-level `errors` array in an otherwise successful response.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The wiki itself reported the operation as failed
    /// (`responseResult.succeeded == false`).
    #[error("wiki rejected the operation: {message} (code: {code})")]
    Rejected {
        /// Message from the wiki's `responseResult`.
        message: String,
        /// Error code from the wiki's `responseResult`.
        code: String,
    },

    /// Response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
