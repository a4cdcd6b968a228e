//! # Web API Error Types
//!
//! Maps engine errors onto HTTP status codes and the JSON error envelope.
//! Leverages thiserror for structured error handling and Axum's
//! `IntoResponse` for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::state_machine::WorkflowError;

/// Web API specific errors with HTTP status code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("invalid definition: {message}")]
    InvalidDefinition { message: String },

    #[error("duplicate definition id: {id}")]
    DuplicateId { id: String },

    #[error("transition rejected: {message}")]
    TransitionRejected { message: String },

    /// Server-side consistency failure, distinct from client errors.
    #[error("integrity error: {message}")]
    Integrity { message: String },
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Validation(e) => Self::InvalidDefinition {
                message: e.to_string(),
            },
            WorkflowError::DuplicateDefinition { id } => Self::DuplicateId { id },
            WorkflowError::DefinitionNotFound { id } => Self::NotFound {
                message: format!("definition not found: {id}"),
            },
            WorkflowError::InstanceNotFound { id } => Self::NotFound {
                message: format!("instance not found: {id}"),
            },
            WorkflowError::Transition(e) => Self::TransitionRejected {
                message: e.to_string(),
            },
            WorkflowError::Integrity { message } => Self::Integrity { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code) = match &self {
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::InvalidDefinition { .. } => (StatusCode::BAD_REQUEST, "INVALID_DEFINITION"),
            ApiError::DuplicateId { .. } => (StatusCode::BAD_REQUEST, "DUPLICATE_ID"),
            ApiError::TransitionRejected { .. } => (StatusCode::BAD_REQUEST, "TRANSITION_REJECTED"),
            ApiError::Integrity { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTEGRITY_ERROR"),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": self.to_string()
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for handler functions.
pub type ApiResult<T> = Result<T, ApiError>;
