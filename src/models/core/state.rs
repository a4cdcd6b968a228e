use serde::{Deserialize, Serialize};

/// A named node in a workflow definition.
///
/// The flags are set by the client when the definition is submitted and are
/// immutable afterwards: `is_initial` selects where new instances start,
/// `enabled` gates whether a transition may enter the state, and `is_final`
/// is a descriptive marker only (it does not block outgoing actions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub is_initial: bool,
    pub is_final: bool,
    pub enabled: bool,
}
