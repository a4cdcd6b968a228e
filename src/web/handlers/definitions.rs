//! # Definition Handlers
//!
//! HTTP handlers for workflow definition creation and listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::models::WorkflowDefinition;
use crate::web::errors::ApiResult;
use crate::web::state::AppState;

/// Create a new workflow definition: POST /definitions
///
/// The body is the full definition. Validation failures and duplicate ids
/// are rejected with 400; nothing is stored on rejection.
pub async fn create_definition(
    State(state): State<AppState>,
    Json(definition): Json<WorkflowDefinition>,
) -> ApiResult<(StatusCode, Json<WorkflowDefinition>)> {
    debug!(definition_id = %definition.id, "definition submitted");
    let stored = state.engine.create_definition(definition)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// List all stored definitions: GET /definitions
///
/// Returns a snapshot in the store's iteration order.
pub async fn list_definitions(State(state): State<AppState>) -> Json<Vec<WorkflowDefinition>> {
    Json(state.engine.list_definitions())
}
