use crate::models::{WorkflowDefinition, WorkflowInstance};

use super::errors::{TransitionError, TransitionResult};

/// The state-machine core: decides whether a requested action may fire from
/// an instance's current state and produces the successor instance value.
///
/// Resolution is a pure in-memory computation with no suspension points; it
/// runs to completion once invoked. Checks short-circuit in a fixed order:
/// action lookup and enablement, source-state membership, then target-state
/// lookup and enablement. Only when all checks pass is the copy-on-write
/// successor produced; the caller is responsible for committing it.
///
/// A state's `is_final` flag never blocks resolution: actions fire from
/// final-marked states whenever their declared source states allow it.
pub struct TransitionResolver;

impl TransitionResolver {
    pub fn resolve(
        instance: &WorkflowInstance,
        definition: &WorkflowDefinition,
        action_id: &str,
    ) -> TransitionResult<WorkflowInstance> {
        let action = definition
            .find_action(action_id)
            .filter(|a| a.enabled)
            .ok_or_else(|| TransitionError::ActionUnavailable {
                action_id: action_id.to_string(),
            })?;

        if !action.can_fire_from(&instance.current_state) {
            return Err(TransitionError::WrongSourceState {
                action_id: action_id.to_string(),
                current_state: instance.current_state.clone(),
            });
        }

        // The missing-state arm is defensive once definitions are validated;
        // the disabled arm is live behavior.
        definition
            .find_state(&action.to_state)
            .filter(|s| s.enabled)
            .ok_or_else(|| TransitionError::TargetUnavailable {
                state_id: action.to_state.clone(),
            })?;

        Ok(instance.with_current_state(&action.to_state))
    }
}
