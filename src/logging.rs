//! # Structured Logging
//!
//! Environment-aware tracing initialization. `RUST_LOG` takes precedence
//! over the environment's default level; `WORKFLOW_LOG_FORMAT=json`
//! switches the console output to JSON.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process. Subsequent calls are
/// no-ops, as is initialization when a subscriber is already installed
/// (test harnesses).
pub fn init_structured_logging(environment: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let default_level = match environment {
            "production" => "info",
            "test" => "warn",
            _ => "debug",
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let json_output = std::env::var("WORKFLOW_LOG_FORMAT")
            .map(|format| format == "json")
            .unwrap_or(false);

        if json_output {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(true))
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .try_init();
        }
    });
}
