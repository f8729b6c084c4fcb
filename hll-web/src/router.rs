//! Router configuration: routes plus tracing and compression middleware.

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::main_page))
        .route("/compact", get(handlers::compact_page))
        .route("/health", get(handlers::health))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use hll_fintraffic::client::{ParkingClient, DEFAULT_BASE_URL};
    use hll_fintraffic::facility::{self, Facility};

    fn test_state() -> AppState {
        let client = Arc::new(ParkingClient::new(DEFAULT_BASE_URL, facility::RUOHOLAHTI));
        let facility = Facility::lookup(facility::RUOHOLAHTI).unwrap();
        AppState::new(client, facility)
    }

    #[test]
    fn test_router_creation() {
        let _router = create_router(test_state());
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
