//! # Health Check Handlers
//!
//! Liveness and readiness endpoints for monitoring and load balancing.

use axum::Json;
use serde::Serialize;

/// Basic health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

fn ok_response() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Basic health check endpoint: GET /health
pub async fn basic_health() -> Json<HealthResponse> {
    ok_response()
}

/// Liveness probe: GET /health/live
pub async fn liveness_probe() -> Json<HealthResponse> {
    ok_response()
}

/// Readiness probe: GET /health/ready
///
/// The engine is purely in-memory with no external collaborators to wait
/// on, so readiness coincides with liveness.
pub async fn readiness_probe() -> Json<HealthResponse> {
    ok_response()
}
