//! # newsdesk-api
//!
//! HTTP API layer for NewsDesk built on Axum.
//!
//! Provides the article, attachment, and login endpoints, static serving
//! of uploaded files, middleware (CORS, request logging), extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
