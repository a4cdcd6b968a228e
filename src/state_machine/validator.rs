use std::collections::HashSet;

use crate::models::WorkflowDefinition;

use super::errors::{ValidationError, ValidationResult};

/// Validates candidate workflow definitions before they are stored.
///
/// Checks run in order and short-circuit on the first failure: field-level
/// checks (non-empty ids), then id uniqueness, then the single-initial-state
/// rule, then state-reference resolution for every action. Definition-id
/// uniqueness across the store is deliberately not checked here; the store's
/// atomic insert is the source of truth for that and breaks races between
/// concurrent validators.
pub struct DefinitionValidator;

impl DefinitionValidator {
    pub fn validate(definition: &WorkflowDefinition) -> ValidationResult<()> {
        Self::validate_fields(definition)?;
        Self::validate_structure(definition)
    }

    /// Field-level checks on the deserialized payload.
    fn validate_fields(definition: &WorkflowDefinition) -> ValidationResult<()> {
        if definition.id.is_empty() {
            return Err(ValidationError::EmptyDefinitionId);
        }
        if definition.states.iter().any(|s| s.id.is_empty()) {
            return Err(ValidationError::EmptyStateId);
        }
        if definition.actions.iter().any(|a| a.id.is_empty()) {
            return Err(ValidationError::EmptyActionId);
        }
        Ok(())
    }

    fn validate_structure(definition: &WorkflowDefinition) -> ValidationResult<()> {
        let mut state_ids = HashSet::new();
        for state in &definition.states {
            if !state_ids.insert(state.id.as_str()) {
                return Err(ValidationError::DuplicateStateId {
                    id: state.id.clone(),
                });
            }
        }

        let mut action_ids = HashSet::new();
        for action in &definition.actions {
            if !action_ids.insert(action.id.as_str()) {
                return Err(ValidationError::DuplicateActionId {
                    id: action.id.clone(),
                });
            }
        }

        let initial_count = definition.states.iter().filter(|s| s.is_initial).count();
        if initial_count != 1 {
            return Err(ValidationError::InitialStateCount {
                count: initial_count,
            });
        }

        // Every action must point at states that exist in this definition.
        for action in &definition.actions {
            for from in &action.from_states {
                if !state_ids.contains(from.as_str()) {
                    return Err(ValidationError::UnknownStateReference {
                        action_id: action.id.clone(),
                        state_id: from.clone(),
                    });
                }
            }
            if !state_ids.contains(action.to_state.as_str()) {
                return Err(ValidationError::UnknownStateReference {
                    action_id: action.id.clone(),
                    state_id: action.to_state.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, State};
    use proptest::prelude::*;

    fn state(id: &str, is_initial: bool) -> State {
        State {
            id: id.to_string(),
            is_initial,
            is_final: false,
            enabled: true,
        }
    }

    fn action(id: &str, from: &[&str], to: &str) -> Action {
        Action {
            id: id.to_string(),
            from_states: from.iter().map(|s| s.to_string()).collect(),
            to_state: to.to_string(),
            enabled: true,
        }
    }

    fn two_state_definition() -> WorkflowDefinition {
        WorkflowDefinition {
            id: "wf".to_string(),
            states: vec![state("a", true), state("b", false)],
            actions: vec![action("go", &["a"], "b")],
        }
    }

    #[test]
    fn accepts_well_formed_definition() {
        assert_eq!(DefinitionValidator::validate(&two_state_definition()), Ok(()));
    }

    #[test]
    fn rejects_missing_initial_state() {
        let mut definition = two_state_definition();
        definition.states[0].is_initial = false;

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::InitialStateCount { count: 0 })
        );
    }

    #[test]
    fn rejects_multiple_initial_states() {
        let mut definition = two_state_definition();
        definition.states[1].is_initial = true;

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::InitialStateCount { count: 2 })
        );
    }

    #[test]
    fn rejects_empty_definition_id() {
        let mut definition = two_state_definition();
        definition.id = String::new();

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::EmptyDefinitionId)
        );
    }

    #[test]
    fn rejects_empty_state_and_action_ids() {
        let mut definition = two_state_definition();
        definition.states[1].id = String::new();
        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::EmptyStateId)
        );

        let mut definition = two_state_definition();
        definition.actions[0].id = String::new();
        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::EmptyActionId)
        );
    }

    #[test]
    fn rejects_duplicate_state_id() {
        let mut definition = two_state_definition();
        definition.states.push(state("b", false));

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::DuplicateStateId { id: "b".to_string() })
        );
    }

    #[test]
    fn rejects_duplicate_action_id() {
        let mut definition = two_state_definition();
        definition.actions.push(action("go", &["b"], "a"));

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::DuplicateActionId { id: "go".to_string() })
        );
    }

    #[test]
    fn rejects_action_with_unknown_target_state() {
        let mut definition = two_state_definition();
        definition.actions[0].to_state = "missing".to_string();

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::UnknownStateReference {
                action_id: "go".to_string(),
                state_id: "missing".to_string(),
            })
        );
    }

    #[test]
    fn rejects_action_with_unknown_source_state() {
        let mut definition = two_state_definition();
        definition.actions[0].from_states.push("missing".to_string());

        assert_eq!(
            DefinitionValidator::validate(&definition),
            Err(ValidationError::UnknownStateReference {
                action_id: "go".to_string(),
                state_id: "missing".to_string(),
            })
        );
    }

    proptest! {
        /// Only definitions with exactly one initial state pass validation,
        /// regardless of how many states they carry.
        #[test]
        fn initial_state_count_must_be_exactly_one(
            total in 1usize..12,
            initial_mask in proptest::collection::vec(any::<bool>(), 1..12),
        ) {
            let states: Vec<State> = (0..total)
                .map(|i| state(&format!("s{i}"), *initial_mask.get(i).unwrap_or(&false)))
                .collect();
            let initial_count = states.iter().filter(|s| s.is_initial).count();
            let definition = WorkflowDefinition {
                id: "wf".to_string(),
                states,
                actions: vec![],
            };

            let outcome = DefinitionValidator::validate(&definition);
            if initial_count == 1 {
                prop_assert_eq!(outcome, Ok(()));
            } else {
                prop_assert_eq!(
                    outcome,
                    Err(ValidationError::InitialStateCount { count: initial_count })
                );
            }
        }
    }
}
