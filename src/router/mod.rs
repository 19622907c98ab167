//! Routing module for the item store application

use crate::item::helpers::error_body;
use crate::item::models::{
    ErrorResponse, HealthResponse, ENDPOINT_NOT_FOUND, INTERNAL_SERVER_ERROR,
};
use crate::item::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes; the catch-panic layer is outermost so a fault anywhere below
    // it still produces the JSON 500 body.
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::item::routes())
        .fallback(endpoint_not_found)
        .layer(log_layer)
        .layer(cors_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Endpoint: GET /health
/// Fixed payload; if the process can answer at all, it is healthy.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Service is running".to_string(),
    })
}

/// Handles any request that matches no route
async fn endpoint_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, error_body(ENDPOINT_NOT_FOUND))
}

/// Converts a handler panic into the generic JSON 500 response
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Unhandled panic while serving request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body(INTERNAL_SERVER_ERROR),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use serde_json::Value;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_panic_boundary_returns_json_500() {
        let app: Router = Router::new()
            .route(
                "/boom",
                get(|| async {
                    panic!("boom");
                    #[allow(unreachable_code)]
                    ()
                }),
            )
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/boom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }
}
