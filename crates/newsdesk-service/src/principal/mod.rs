//! Principal bootstrap.

pub mod bootstrap;

pub use bootstrap::ensure_default_principal;
