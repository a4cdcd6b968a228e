//! Workflow engine HTTP server entry point.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use workflow_core::config::WorkflowConfig;
use workflow_core::logging;
use workflow_core::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WorkflowConfig::load().context("failed to load configuration")?;
    logging::init_structured_logging(&config.environment);

    let bind_address = config.web.bind_address.clone();
    let app = web::create_app(AppState::new(config.web));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    info!(
        address = %bind_address,
        environment = %config.environment,
        "workflow server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("workflow server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
