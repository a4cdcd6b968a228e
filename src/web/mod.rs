//! # Web API Module
//!
//! Axum-based REST surface over the workflow engine. The transport layer is
//! deliberately thin: handlers deserialize typed requests, invoke the engine,
//! and map engine errors onto HTTP responses.

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Create the main Axum application with all routes and middleware.
pub fn create_app(app_state: AppState) -> Router {
    let request_timeout = Duration::from_millis(app_state.config.request_timeout_ms);

    let mut app = Router::new()
        .merge(routes::api_routes())
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout));

    if app_state.config.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(app_state)
}
