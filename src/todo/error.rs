use super::task::MIN_TEXT_LEN;
use crate::storage::StorageError;
use thiserror::Error;

/// Rejection of task text. The only user-facing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task cannot be empty")]
    Empty,

    #[error("Task must be at least {min} characters (got {len})", min = MIN_TEXT_LEN)]
    TooShort { len: usize },
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task index {index} is out of bounds (list has {len} tasks)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Failed to persist tasks: {0}")]
    Storage(#[from] StorageError),
}
