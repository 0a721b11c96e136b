//! # Meetup Server
//!
//! Entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use meetup_server::config::Settings;
use meetup_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings come first: they pick the log format
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    meetup_server::telemetry::init_tracing(settings.log_format);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
