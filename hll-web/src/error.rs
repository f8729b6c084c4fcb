//! HTTP error handling for page renders.
//!
//! There is no degraded or partial page: any fetch or decode failure
//! turns the whole render into a generic error page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use hll_fintraffic::error::FetchError;

/// Failure of a page render.
#[derive(Debug, Error)]
pub enum PageError {
    /// Upstream API fetch or decode failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Local wall-clock computation failed (nonexistent local time).
    #[error("could not resolve local time in Europe/Helsinki")]
    LocalTime,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("page render failed: {:#}", anyhow::Error::from(self));
        let body = Html(
            "<!DOCTYPE html>\
             <html lang=\"en\"><head><meta charset=\"utf-8\">\
             <title>Hullulahti</title></head>\
             <body><h1>Something went wrong</h1>\
             <p>The parking data could not be fetched. Try again in a moment.</p>\
             </body></html>"
                .to_string(),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
