//! # newsdesk-entity
//!
//! Domain entity models for NewsDesk. Every struct in this crate
//! represents a database table row or the input needed to create one.
//! Row types derive `sqlx::FromRow`.
//!
//! Articles and attachments are related by foreign key only; there is
//! no back-pointer from an attachment to its article object.

pub mod article;
pub mod attachment;
pub mod principal;
