//! HTTP server initialization and runtime setup.
//!
//! Handles the optional database rebuild, connection pool, schema creation,
//! and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::schema;
use crate::routes::app_router;
use crate::state::{AppState, ShutdownSignal};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Database rebuild (when `rebuild_db` is set)
/// - PostgreSQL connection pool
/// - Tables (created if absent)
/// - Axum HTTP server
///
/// Returns once `POST /shutdown`, Ctrl+C or SIGTERM stops the server and
/// in-flight requests have drained.
///
/// # Errors
///
/// Returns an error if:
/// - Database rebuild or connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    if config.rebuild_db {
        schema::rebuild_database(&config.maintenance_options(), &config.db_name).await?;
    }

    let pool = connect(&config).await?;
    tracing::info!("Connected to database");

    schema::create_tables(&pool).await?;
    tracing::info!("Tables ready");

    let shutdown = ShutdownSignal::new();
    let state = AppState::new(Arc::new(pool.clone()), shutdown.clone());
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the connection pool from the configured pool settings.
///
/// # Errors
///
/// Returns an error if no connection can be established within the
/// acquire timeout.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

/// Resolves on the first of: the shutdown endpoint, Ctrl+C, SIGTERM.
async fn shutdown_signal(shutdown: ShutdownSignal) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = shutdown.wait() => {
            tracing::info!("Shutdown requested over HTTP");
        },
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    tracing::info!("Draining in-flight requests...");
}
