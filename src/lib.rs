#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Workflow Core
//!
//! In-memory finite-state workflow engine. Clients declare workflows as
//! states plus actions (transition rules), instantiate them, and drive
//! instances between states through validated action execution.
//!
//! The core is the validation-and-transition engine; everything else is
//! thin plumbing around it:
//!
//! - [`models`] - Typed workflow entities (definitions, states, actions,
//!   instances)
//! - [`state_machine`] - Definition validation and transition resolution
//! - [`registry`] - Concurrent in-memory entity stores
//! - [`orchestration`] - The [`orchestration::WorkflowEngine`] lifecycle glue
//! - [`web`] - Axum REST surface
//! - [`config`] - Layered configuration management
//! - [`logging`] - Structured tracing initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use workflow_core::models::{Action, State, WorkflowDefinition};
//! use workflow_core::orchestration::WorkflowEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = WorkflowEngine::new();
//! engine.create_definition(WorkflowDefinition {
//!     id: "ticket".to_string(),
//!     states: vec![
//!         State { id: "open".into(), is_initial: true, is_final: false, enabled: true },
//!         State { id: "closed".into(), is_initial: false, is_final: true, enabled: true },
//!     ],
//!     actions: vec![Action {
//!         id: "close".into(),
//!         from_states: vec!["open".into()],
//!         to_state: "closed".into(),
//!         enabled: true,
//!     }],
//! })?;
//!
//! let instance = engine.start_instance("ticket")?;
//! let closed = engine.execute_action(&instance.instance_id, "close")?;
//! assert_eq!(closed.current_state, "closed");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod registry;
pub mod state_machine;
pub mod web;
