use std::time::Duration;
use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Failure modes of the task store.
///
/// Each variant maps to the HTTP status code the API layer reports for it:
/// `NotFound` becomes 404, everything else is an internal failure (500).
/// Malformed input never reaches the store; it is rejected at the HTTP layer.
///
/// # Examples
///
/// ```rust
/// use taskd_core::error::TaskError;
///
/// let err = TaskError::not_found_id(42);
/// assert!(err.is_not_found());
/// assert_eq!(err.status_code(), 404);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// No task exists for the given identifier
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// The operation exceeded its deadline and was abandoned
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl TaskError {
    /// Create a not found error for a task ID
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(format!("Task with ID {id} not found"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, TaskError::Database(_))
    }

    /// Convert to the HTTP status code equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::NotFound(_) => 404,
            TaskError::Database(_) => 500,
            TaskError::Timeout(_) => 500,
        }
    }
}
