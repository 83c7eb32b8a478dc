//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use tgo_common::{AppConfig, AppError};
use tgo_db::{create_pool, run_migrations, DatabaseConfig, MemoryStore};
use tgo_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware so probes are never rate limited.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let api = apply_middleware(create_router(), state.config())?;
    Ok(api.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// With a database configured the PostgreSQL store is used (migrations run first),
/// otherwise the in-memory store.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = ServiceContextBuilder::new().locale(config.app.locale);

    let builder = match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&DatabaseConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
            info!("PostgreSQL connection established");
            builder.postgres(pool)
        }
        None => {
            warn!("DATABASE_URL not set, using the in-memory store");
            builder.memory(MemoryStore::new())
        }
    };

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
