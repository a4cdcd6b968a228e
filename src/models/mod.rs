//! # Data Model
//!
//! Typed workflow entities shared across the validator, resolver, engine,
//! and web layers. JSON field names follow the wire format exactly
//! (`isInitial`, `fromStates`, `instanceId`, ...).

pub mod core;

pub use core::{Action, State, WorkflowDefinition, WorkflowInstance};
