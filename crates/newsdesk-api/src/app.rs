//! Application builder and server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use newsdesk_auth::PasswordHasher;
use newsdesk_core::config::AppConfig;
use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::traits::StorageProvider;
use newsdesk_database::RecordStore;
use newsdesk_service::{OrphanSweeper, ensure_default_principal};
use newsdesk_storage::LocalStorageProvider;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Initialize every dependency from `config` and serve until Ctrl-C or
/// SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(
        database = ?config.database.provider,
        upload_root = %config.storage.upload_root,
        "Starting NewsDesk server"
    );

    let records = RecordStore::connect(&config.database).await?;
    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::from_config(&config.storage).await?);

    ensure_default_principal(
        records.principals().as_ref(),
        &PasswordHasher::new(),
        &config.admin.username,
        &config.admin.password,
    )
    .await?;

    if config.storage.sweep_orphans_on_startup {
        let sweeper = OrphanSweeper::new(records.attachments(), Arc::clone(&storage));
        if let Err(e) = sweeper.sweep().await {
            warn!(error = %e, "Orphan sweep failed");
        }
    }

    let bind_address = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, records.clone(), storage);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to bind {bind_address}"),
                e,
            )
        })?;
    info!(address = %bind_address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(grace))
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    records.close().await;
    info!("NewsDesk server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM, then arms a hard deadline for in-flight
/// requests.
async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(grace_seconds = grace.as_secs(), "Shutdown signal received, draining requests");
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        warn!("Grace period elapsed, exiting");
        std::process::exit(1);
    });
}
