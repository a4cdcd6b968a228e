use serde::{Deserialize, Serialize};

use super::{Action, State};

/// The static description of a workflow: its states and legal actions.
///
/// A definition owns its states and actions and is immutable once stored.
/// Structural invariants (exactly one initial state, unique ids, resolvable
/// state references) are enforced by the definition validator before a
/// definition is accepted; id uniqueness across definitions is enforced by
/// the store's atomic insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub id: String,
    /// States in submission order. Ids are unique within the definition.
    pub states: Vec<State>,
    /// Actions in submission order. Ids are unique within the definition.
    pub actions: Vec<Action>,
}

impl WorkflowDefinition {
    /// The unique initial state, if the definition carries exactly one.
    ///
    /// Validated definitions always have one; the `Option` exists for the
    /// defensive integrity paths in the engine.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_initial)
    }

    /// Look up a state by id.
    pub fn find_state(&self, state_id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == state_id)
    }

    /// Look up an action by id.
    pub fn find_action(&self, action_id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == action_id)
    }
}
