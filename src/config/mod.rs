//! # Configuration
//!
//! Layered, environment-aware configuration: compiled defaults, then an
//! optional `config/workflow.toml` (plus a per-environment override file),
//! then `WORKFLOW_*` environment variables. Nested keys use a double
//! underscore in the environment, e.g. `WORKFLOW_WEB__BIND_ADDRESS`.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Deployment environment name; selects the override file and the
    /// default log level.
    pub environment: String,
    pub web: WebConfig,
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub bind_address: String,
    pub request_timeout_ms: u64,
    pub cors_enabled: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            web: WebConfig::default(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_ms: 10_000,
            cors_enabled: true,
        }
    }
}

impl WorkflowConfig {
    /// Load configuration with environment auto-detection (`WORKFLOW_ENV`,
    /// defaulting to `development`).
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WORKFLOW_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_for_environment(&environment)
    }

    /// Load configuration for an explicit environment.
    pub fn load_for_environment(environment: &str) -> Result<Self, ConfigError> {
        let defaults = Self {
            environment: environment.to_string(),
            ..Self::default()
        };

        Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name("config/workflow").required(false))
            .add_source(File::with_name(&format!("config/workflow.{environment}")).required(false))
            .add_source(Environment::with_prefix("WORKFLOW").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = WorkflowConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.web.bind_address, "127.0.0.1:8080");
        assert_eq!(config.web.request_timeout_ms, 10_000);
        assert!(config.web.cors_enabled);
    }

    #[test]
    fn explicit_environment_is_carried_through() {
        let config = WorkflowConfig::load_for_environment("test").unwrap();
        assert_eq!(config.environment, "test");
    }
}
