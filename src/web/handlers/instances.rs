//! # Instance Handlers
//!
//! HTTP handlers for the workflow instance lifecycle: creation, retrieval,
//! and validated action execution.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::models::WorkflowInstance;
use crate::web::errors::ApiResult;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInstanceRequest {
    pub definition_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteActionRequest {
    pub action_id: String,
}

/// Start a new instance of a definition: POST /instances
///
/// Returns 404 for an unknown definition and 500 if a stored definition
/// turns out to have no initial state (a consistency bug, never bad input).
pub async fn start_instance(
    State(state): State<AppState>,
    Json(request): Json<StartInstanceRequest>,
) -> ApiResult<Json<WorkflowInstance>> {
    let instance = state.engine.start_instance(&request.definition_id)?;
    Ok(Json(instance))
}

/// List all instances: GET /instances
pub async fn list_instances(State(state): State<AppState>) -> Json<Vec<WorkflowInstance>> {
    Json(state.engine.list_instances())
}

/// Fetch a single instance: GET /instances/{id}
pub async fn get_instance(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> ApiResult<Json<WorkflowInstance>> {
    let instance = state.engine.get_instance(&instance_id)?;
    Ok(Json(instance))
}

/// Execute an action against an instance: POST /instances/{id}/execute
///
/// On success the updated instance is returned; on rejection the stored
/// instance is left unchanged.
pub async fn execute_action(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Json(request): Json<ExecuteActionRequest>,
) -> ApiResult<Json<WorkflowInstance>> {
    debug!(instance_id = %instance_id, action_id = %request.action_id, "execute requested");
    let updated = state.engine.execute_action(&instance_id, &request.action_id)?;
    Ok(Json(updated))
}
