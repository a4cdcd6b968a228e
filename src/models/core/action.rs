use serde::{Deserialize, Serialize};

/// A directed transition rule within a workflow definition.
///
/// An action fires from any state listed in `from_states` into exactly one
/// `to_state`. Disabled actions remain part of the definition but are never
/// executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    /// Legal source states, matched by state id. Treated as a set.
    pub from_states: Vec<String>,
    pub to_state: String,
    pub enabled: bool,
}

impl Action {
    /// Whether this action lists `state_id` as a legal source state.
    pub fn can_fire_from(&self, state_id: &str) -> bool {
        self.from_states.iter().any(|s| s == state_id)
    }
}
