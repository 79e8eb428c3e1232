//! # StudyBuddy Backend
//!
//! Application entry point. Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use studybuddy_backend::config::Settings;
use studybuddy_backend::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    studybuddy_backend::telemetry::init_tracing();

    info!("Starting StudyBuddy backend...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
