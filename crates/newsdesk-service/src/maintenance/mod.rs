//! Housekeeping tasks.

pub mod sweep;

pub use sweep::{OrphanSweeper, SweepReport};
