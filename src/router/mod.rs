//! Router configuration module

use std::time::Duration;

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::handlers::{health::health_check, item_routes};
use crate::middleware::request_logger_middleware;
use crate::openapi::openapi_json;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let request_timeout = Duration::from_secs(app_state.config.request_timeout);

    let health = Router::new().route("/health", get(health_check));

    let docs = Router::new().route("/api-docs/openapi.json", get(openapi_json));

    health
        .merge(docs)
        .nest("/items", item_routes()) // PATCH /items/{id}
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(request_logger_middleware))
                .layer(TimeoutLayer::with_status_code(
                    axum::http::StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
