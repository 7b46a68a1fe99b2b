//! # newsdesk-database
//!
//! The record store NewsDesk persists articles, attachments, and
//! principals in. Defines the store traits the service layer depends on
//! and provides two implementations:
//!
//! - **postgres**: sqlx repositories over a PostgreSQL pool
//! - **memory**: an in-process store for development and tests
//!
//! The backend is selected at runtime from [`DatabaseConfig`].
//!
//! [`DatabaseConfig`]: newsdesk_core::config::DatabaseConfig

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::RecordStore;
pub use memory::MemoryStore;
pub use store::{ArticleStore, AttachmentStore, PrincipalStore};
