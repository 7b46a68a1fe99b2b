//! Article operations.

pub mod cascade;
pub mod service;

pub use cascade::{CascadeDeleter, CascadeReport};
pub use service::ArticleService;
