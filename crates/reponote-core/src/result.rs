//! Convenience result type alias for RepoNote.

use crate::error::AppError;

/// A specialized `Result` type for RepoNote operations.
pub type AppResult<T> = Result<T, AppError>;
