//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    JwtTokenIssuer, SubjectService, SubjectServiceImpl, TokenIssuer, UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgSubjectRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers.
///
/// Holds only the delegate services; handlers keep no other state between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub subjects: Arc<dyn SubjectService>,
    pub tokens: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserService>,
        subjects: Arc<dyn SubjectService>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            subjects,
            tokens,
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to PostgreSQL")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations applied");
        }

        let user_repo = Arc::new(PgUserRepository::new(db.clone()));
        let subject_repo = Arc::new(PgSubjectRepository::new(db));

        let state = AppState::new(
            Arc::new(UserServiceImpl::new(user_repo)),
            Arc::new(SubjectServiceImpl::new(subject_repo)),
            Arc::new(JwtTokenIssuer::new(settings.jwt.clone())),
        );

        let router = build_router(state, &settings);

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Router with the middleware stack applied
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}
