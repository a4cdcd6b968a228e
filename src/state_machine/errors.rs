use thiserror::Error;

/// Structural failures detected while validating a candidate definition.
///
/// Field-level checks run before structural ones; the first failure wins and
/// the definition is never stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("definition id must not be empty")]
    EmptyDefinitionId,

    #[error("state id must not be empty")]
    EmptyStateId,

    #[error("action id must not be empty")]
    EmptyActionId,

    #[error("duplicate state id: {id}")]
    DuplicateStateId { id: String },

    #[error("duplicate action id: {id}")]
    DuplicateActionId { id: String },

    #[error("definition must have exactly one initial state, found {count}")]
    InitialStateCount { count: usize },

    #[error("action {action_id} references unknown state {state_id}")]
    UnknownStateReference {
        action_id: String,
        state_id: String,
    },
}

/// Rejections produced by the transition resolver.
///
/// Every variant is a client error: the request is refused and the instance
/// is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("action {action_id} not found or disabled")]
    ActionUnavailable { action_id: String },

    #[error("action {action_id} is not executable from state {current_state}")]
    WrongSourceState {
        action_id: String,
        current_state: String,
    },

    #[error("target state {state_id} not found or disabled")]
    TargetUnavailable { state_id: String },
}

/// Engine-level errors spanning validation, lookup, and transition execution.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("invalid definition: {0}")]
    Validation(#[from] ValidationError),

    #[error("definition id already exists: {id}")]
    DuplicateDefinition { id: String },

    #[error("definition not found: {id}")]
    DefinitionNotFound { id: String },

    #[error("instance not found: {id}")]
    InstanceNotFound { id: String },

    #[error("transition rejected: {0}")]
    Transition(#[from] TransitionError),

    /// Consistency bug, not bad input: definitions are never deleted, so a
    /// dangling reference from a stored record signals store corruption.
    #[error("integrity error: {message}")]
    Integrity { message: String },
}

impl WorkflowError {
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type TransitionResult<T> = Result<T, TransitionError>;
pub type WorkflowResult<T> = Result<T, WorkflowError>;
