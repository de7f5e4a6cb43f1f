//! HTTP router setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::events::{self, EventHandler};
use crate::event_store::EventStore;

/// Create the Axum router with all endpoints
///
/// Unmatched paths fall through to Axum's default 404.
pub fn create_router(handler: Arc<EventHandler>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(events::get_all_events))
        .route("/events/", get(events::get_all_events))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(handler)
}

/// Build the application router with the default store wired in
pub fn build_app() -> Router {
    let event_store = EventStore::new();
    let handler = Arc::new(EventHandler::new(event_store));
    create_router(handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_events_route_with_and_without_trailing_slash() {
        for uri in ["/events", "/events/"] {
            let response = build_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "uri {}", uri);
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = build_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_get_method_is_rejected() {
        let response = build_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/events/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let response = build_app()
            .oneshot(
                Request::builder()
                    .uri("/events/")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
