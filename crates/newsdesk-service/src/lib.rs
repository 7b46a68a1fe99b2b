//! # newsdesk-service
//!
//! Business logic for NewsDesk. Services receive their stores and storage
//! provider as `Arc` trait objects at construction time. Every mutating
//! operation takes a [`RequestContext`], which only the [`MutationGate`]
//! can produce from verified credentials.

pub mod article;
pub mod attachment;
pub mod context;
pub mod gate;
pub mod maintenance;
pub mod principal;

#[cfg(test)]
pub(crate) mod testing;

pub use article::{ArticleService, CascadeDeleter, CascadeReport};
pub use attachment::AttachmentService;
pub use context::RequestContext;
pub use gate::MutationGate;
pub use maintenance::{OrphanSweeper, SweepReport};
pub use principal::ensure_default_principal;
