//! Application Startup
//!
//! Builds the pool, repositories and services once and wires them into the
//! HTTP router.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::application::services::{
    EventService, EventServiceImpl, SpaceService, SpaceServiceImpl, UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgEventRepository, PgSpaceRepository, PgUserRepository};
use crate::presentation::http::{create_router, handlers::health};
use crate::shared::snowflake::{IdGenerator, SnowflakeGenerator};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Used by the readiness check only; all data access goes through the services.
    pub db: PgPool,
    pub users: Arc<dyn UserService>,
    pub spaces: Arc<dyn SpaceService>,
    pub events: Arc<dyn EventService>,
}

impl AppState {
    /// Wire the PostgreSQL repositories into the services.
    pub fn from_pool(db: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(db.clone()));
        let space_repo = Arc::new(PgSpaceRepository::new(db.clone()));
        let event_repo = Arc::new(PgEventRepository::new(db.clone()));

        let users = UserServiceImpl::new(
            user_repo,
            space_repo.clone(),
            event_repo.clone(),
            id_generator.clone(),
        );
        let spaces = SpaceServiceImpl::new(
            space_repo.clone(),
            event_repo.clone(),
            id_generator.clone(),
        );
        let events = EventServiceImpl::new(event_repo, space_repo, id_generator);

        Self {
            db,
            users: Arc::new(users),
            spaces: Arc::new(spaces),
            events: Arc::new(events),
        }
    }
}

/// Router with request tracing, as served by [`Application`].
pub fn build_router(state: AppState) -> Router {
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to PostgreSQL")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");
        }

        let id_generator: Arc<dyn IdGenerator> =
            Arc::new(SnowflakeGenerator::new(settings.snowflake.machine_id));

        let state = AppState::from_pool(db, id_generator);
        let router = build_router(state);

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
