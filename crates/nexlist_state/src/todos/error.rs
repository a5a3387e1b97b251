use nexlist_client::ApiError;
use nexlist_core::TodoId;
use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task must not be empty")]
    EmptyTask,
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Todo {0} is not in the local cache")]
    UnknownTodo(TodoId),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TodoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Trimmed task text, or `EmptyTask` for blank input.
pub(crate) fn validate_task(task: &str) -> Result<&str, ValidationError> {
    let trimmed = task.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    Ok(trimmed)
}
