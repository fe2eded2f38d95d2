//! Tool-specific error types.
//!
//! The `Display` strings of these variants are exactly the messages that end
//! up in the `{success: false, error: ...}` envelope returned to clients.

use thiserror::Error;

/// Errors that can occur while executing a search tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The required `query` argument was absent or empty.
    #[error("Query parameter is required")]
    MissingQuery,

    /// The upstream API answered with a non-success HTTP status.
    #[error("Pexels API error: {status} - {status_text}")]
    Api { status: u16, status_text: String },

    /// The upstream response body could not be parsed.
    #[error("Failed to parse Pexels API response: {0}")]
    Parse(#[source] reqwest::Error),

    /// The request never completed (DNS, connect, TLS, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ToolError {
    /// Create an `Api` error from a response status code.
    ///
    /// Uses the canonical reason phrase; statuses without one render with an
    /// empty text, mirroring what `statusText` yields for unknown codes.
    pub fn api(status: reqwest::StatusCode) -> Self {
        Self::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
