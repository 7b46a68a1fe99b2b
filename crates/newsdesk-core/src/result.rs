//! Convenience result type alias for NewsDesk.

use crate::error::AppError;

/// A specialized `Result` type for NewsDesk operations.
pub type AppResult<T> = Result<T, AppError>;
