//! Route definitions for the NewsDesk HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware::uploads::hide_partial_uploads;
use crate::state::AppState;

/// Build the router with every route and the static upload mount.
pub fn build_router(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.storage.max_upload_size_bytes)
        .unwrap_or(usize::MAX);
    let mount_path = state.config.storage.mount_path();
    let uploads = ServeDir::new(&state.config.storage.upload_root);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .merge(auth_routes())
        .merge(news_routes(max_upload))
        .merge(upload_routes(&mount_path, uploads))
        .with_state(state)
}

/// Login endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/token", post(handlers::auth::token))
}

/// Article and attachment endpoints.
fn news_routes(max_upload: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/news",
            get(handlers::article::list_articles).post(handlers::article::create_article),
        )
        .route(
            "/news/{id}",
            get(handlers::article::get_article)
                .put(handlers::article::update_article)
                .delete(handlers::article::delete_article),
        )
        .route(
            "/news/{id}/files",
            post(handlers::attachment::upload_attachment)
                .layer(DefaultBodyLimit::max(max_upload)),
        )
}

/// Static serving of stored attachment files.
fn upload_routes(mount_path: &str, uploads: ServeDir) -> Router<AppState> {
    Router::new()
        .nest_service(mount_path, uploads)
        .layer(axum_middleware::from_fn(hide_partial_uploads))
}
