//! HTTP middleware.

pub mod cors;
pub mod logging;
pub mod uploads;
