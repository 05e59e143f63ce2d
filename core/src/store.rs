use crate::{
    error::Result,
    models::{NewTask, Task},
};
use async_trait::async_trait;

/// Store trait for task persistence and retrieval operations.
///
/// This trait is the persistence boundary of the service: it translates task
/// operations into SQL and is the only place shared state lives.
/// Implementations must be thread-safe and support concurrent access.
///
/// Callers bound each invocation with a deadline (`tokio::time::timeout`
/// around the returned future); dropping the future cancels the in-flight
/// database operation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new task with server-assigned id and timestamps.
    ///
    /// Both `created_at` and `updated_at` are set to the insertion time, so
    /// `created_at == updated_at` on the returned task.
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with assigned ID and timestamps
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// List all tasks, ordered by id ascending (insertion order).
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - All stored tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn list(&self) -> Result<Vec<Task>>;

    /// Get a task by its numeric ID.
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn get_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Overwrite title, description and due date of an existing task.
    ///
    /// Refreshes `updated_at`; `created_at` and `id` are never changed.
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, id: i64, task: NewTask) -> Result<Task>;

    /// Delete a task by ID. Deleting an absent ID is not an error.
    ///
    /// # Returns
    /// * `Ok(())` - The row is gone, whether or not it existed
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<()>;

    /// Close the underlying connection pool.
    ///
    /// Called once, after the HTTP server has stopped accepting requests.
    async fn close(&self);
}
