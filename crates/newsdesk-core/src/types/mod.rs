//! Core type definitions used across the NewsDesk workspace.

pub mod id;

pub use id::*;
