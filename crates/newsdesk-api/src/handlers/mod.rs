//! Request handlers, one module per resource.

pub mod article;
pub mod attachment;
pub mod auth;
pub mod health;
