//! # Web API Route Definitions
//!
//! Explicit handler registration keyed by method and path; the validator and
//! resolver stay fully decoupled from the transport layer.

use axum::routing::{get, post};
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Workflow API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Definitions API
        .route("/definitions", post(handlers::definitions::create_definition))
        .route("/definitions", get(handlers::definitions::list_definitions))
        // Instances API
        .route("/instances", post(handlers::instances::start_instance))
        .route("/instances", get(handlers::instances::list_instances))
        .route("/instances/:id", get(handlers::instances::get_instance))
        .route(
            "/instances/:id/execute",
            post(handlers::instances::execute_action),
        )
}

/// Health and probe routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/health/live", get(handlers::health::liveness_probe))
        .route("/health/ready", get(handlers::health::readiness_probe))
}
