use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single running execution of a workflow definition.
///
/// An instance is an immutable value: transitions never mutate a stored
/// instance in place, they produce a successor via [`with_current_state`]
/// and swap it into the store as a whole.
///
/// [`with_current_state`]: WorkflowInstance::with_current_state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInstance {
    /// Generated, globally unique.
    pub instance_id: String,
    /// Reference to the owning definition; the definition is not embedded.
    pub definition_id: String,
    pub current_state: String,
}

impl WorkflowInstance {
    /// Create a fresh instance pointing at the given definition's state.
    pub fn new(definition_id: impl Into<String>, initial_state: impl Into<String>) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            definition_id: definition_id.into(),
            current_state: initial_state.into(),
        }
    }

    /// Copy-on-write successor: identical to `self` except for the current
    /// state.
    pub fn with_current_state(&self, state_id: impl Into<String>) -> Self {
        Self {
            instance_id: self.instance_id.clone(),
            definition_id: self.definition_id.clone(),
            current_state: state_id.into(),
        }
    }
}
