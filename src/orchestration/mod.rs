//! # Orchestration
//!
//! Instance-lifecycle glue over the state-machine core: the
//! [`WorkflowEngine`] owns the definition and instance stores and exposes
//! the operations the web layer invokes.

pub mod engine;

pub use engine::WorkflowEngine;
