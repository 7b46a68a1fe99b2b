//! # newsdesk-storage
//!
//! Where attachment bytes live. Provides the filename sanitizer that turns
//! a client-supplied filename into a unique, filesystem-safe storage name,
//! and the local filesystem [`StorageProvider`] uploads are written to.
//!
//! [`StorageProvider`]: newsdesk_core::traits::StorageProvider

pub mod naming;
pub mod providers;

pub use naming::{SanitizedFilename, sanitize_filename};
pub use providers::LocalStorageProvider;
