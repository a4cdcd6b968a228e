use tracing::{debug, info};

use crate::models::{WorkflowDefinition, WorkflowInstance};
use crate::registry::InMemoryStore;
use crate::state_machine::{DefinitionValidator, TransitionResolver, WorkflowError, WorkflowResult};

/// Ties the validator, resolver, and stores together into the workflow
/// lifecycle: definition creation, instance creation, and action execution.
///
/// Definitions are validated then inserted once and never mutated or
/// deleted. Instances are inserted once and updated only by swapping in
/// copy-on-write successors.
///
/// Action execution commits through compare-and-replace keyed on the
/// previously read instance value. A failed swap means a concurrent
/// execution committed first; the request then re-validates against the
/// fresh record instead of overwriting it, so no update is ever silently
/// lost.
#[derive(Debug, Default)]
pub struct WorkflowEngine {
    definitions: InMemoryStore<WorkflowDefinition>,
    instances: InMemoryStore<WorkflowInstance>,
}

impl WorkflowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new workflow definition.
    ///
    /// The store's atomic insert enforces id uniqueness; two concurrent
    /// submissions of the same id both pass validation but only one is
    /// accepted.
    pub fn create_definition(
        &self,
        definition: WorkflowDefinition,
    ) -> WorkflowResult<WorkflowDefinition> {
        DefinitionValidator::validate(&definition)?;

        if !self
            .definitions
            .insert_if_absent(definition.id.clone(), definition.clone())
        {
            return Err(WorkflowError::DuplicateDefinition { id: definition.id });
        }

        info!(definition_id = %definition.id, "workflow definition stored");
        Ok(definition)
    }

    /// Snapshot of all stored definitions.
    pub fn list_definitions(&self) -> Vec<WorkflowDefinition> {
        self.definitions.values()
    }

    /// Create a new instance of `definition_id`, placed in its initial
    /// state.
    pub fn start_instance(&self, definition_id: &str) -> WorkflowResult<WorkflowInstance> {
        let definition =
            self.definitions
                .get(definition_id)
                .ok_or_else(|| WorkflowError::DefinitionNotFound {
                    id: definition_id.to_string(),
                })?;

        // Unreachable for validated definitions; stored records missing an
        // initial state signal a consistency bug.
        let initial = definition.initial_state().ok_or_else(|| {
            WorkflowError::integrity(format!("definition {definition_id} has no initial state"))
        })?;

        let instance = WorkflowInstance::new(&definition.id, &initial.id);
        // Fresh UUID keys are assumed collision-free.
        self.instances
            .insert_if_absent(instance.instance_id.clone(), instance.clone());

        info!(
            instance_id = %instance.instance_id,
            definition_id = %instance.definition_id,
            current_state = %instance.current_state,
            "workflow instance started"
        );
        Ok(instance)
    }

    pub fn get_instance(&self, instance_id: &str) -> WorkflowResult<WorkflowInstance> {
        self.instances
            .get(instance_id)
            .ok_or_else(|| WorkflowError::InstanceNotFound {
                id: instance_id.to_string(),
            })
    }

    /// Snapshot of all stored instances.
    pub fn list_instances(&self) -> Vec<WorkflowInstance> {
        self.instances.values()
    }

    /// Execute `action_id` against `instance_id`, transitioning it to the
    /// action's target state.
    ///
    /// Load, resolve, and commit run in a retry loop: every failed
    /// compare-and-replace re-reads the instance and re-runs the full check
    /// sequence, so each committed transition was validated against the
    /// exact value it replaced.
    pub fn execute_action(
        &self,
        instance_id: &str,
        action_id: &str,
    ) -> WorkflowResult<WorkflowInstance> {
        loop {
            let instance =
                self.instances
                    .get(instance_id)
                    .ok_or_else(|| WorkflowError::InstanceNotFound {
                        id: instance_id.to_string(),
                    })?;

            // Definitions are never deleted; a missing one here is a
            // consistency bug, not a user error.
            let definition = self.definitions.get(&instance.definition_id).ok_or_else(|| {
                WorkflowError::integrity(format!(
                    "instance {instance_id} references missing definition {}",
                    instance.definition_id
                ))
            })?;

            let updated = TransitionResolver::resolve(&instance, &definition, action_id)?;

            if self
                .instances
                .compare_and_replace(instance_id, &instance, updated.clone())
            {
                debug!(
                    instance_id = %instance_id,
                    action_id = %action_id,
                    from_state = %instance.current_state,
                    to_state = %updated.current_state,
                    "transition committed"
                );
                return Ok(updated);
            }

            debug!(
                instance_id = %instance_id,
                action_id = %action_id,
                "concurrent update detected, retrying transition"
            );
        }
    }
}
