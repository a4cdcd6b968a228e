//! # Web API Application State
//!
//! Shared state handed to every handler: the workflow engine and the web
//! configuration it was started with.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::orchestration::WorkflowEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<WorkflowEngine>,
    pub config: WebConfig,
}

impl AppState {
    pub fn new(config: WebConfig) -> Self {
        Self {
            engine: Arc::new(WorkflowEngine::new()),
            config,
        }
    }
}
