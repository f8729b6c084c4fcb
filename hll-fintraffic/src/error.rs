//! Error types for Fintraffic API fetches and response decoding.

use thiserror::Error;

/// Errors that can occur when fetching or decoding parking data.
///
/// There is deliberately no retry or fallback layered on top of these:
/// any fetch failure fails the whole page render.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, body read).
    #[cfg(feature = "api")]
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from the API.
    #[error("bad response status for {url}: {status}")]
    Status { url: String, status: u16 },

    /// Response body did not match the expected JSON shape, or failed
    /// validation after decoding.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

impl FetchError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
