//! # State Machine Core
//!
//! The validation-and-transition engine: the rules deciding whether a
//! definition is well-formed and whether a requested action may fire from an
//! instance's current state. Both components are pure and synchronous; all
//! storage concerns live in [`crate::registry`] and are orchestrated by
//! [`crate::orchestration`].

pub mod errors;
pub mod resolver;
pub mod validator;

pub use errors::{
    TransitionError, TransitionResult, ValidationError, ValidationResult, WorkflowError,
    WorkflowResult,
};
pub use resolver::TransitionResolver;
pub use validator::DefinitionValidator;
