use crate::common::{row_to_task, sqlx_error_to_task_error};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;
use taskd_core::{
    error::{Result, TaskError},
    models::{NewTask, Task},
    store::TaskStore,
};

/// Upper bound for the schema bootstrap statement at startup.
const SCHEMA_TIMEOUT: Duration = Duration::from_secs(5);

/// Statement that brings the task table into existence. Idempotent; this is
/// schema bootstrap, not a migration framework.
const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    due_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

/// SQLite implementation of the TaskStore trait
///
/// Provides task persistence backed by a `sqlx` connection pool, with WAL
/// journaling for file databases and a busy timeout tuned for concurrent
/// request handlers.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Create a new SQLite store with the given database URL.
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    /// * `max_connections` - Pool size for file databases
    ///
    /// # Returns
    /// * `Ok(SqliteTaskStore)` - Successfully connected store
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use taskd_database::SqliteTaskStore;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let store = SqliteTaskStore::new(":memory:", 5).await?;
    ///
    /// // File-based database
    /// let store = SqliteTaskStore::new("sqlite:///tmp/tasks.db", 5).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let in_memory = database_url.contains(":memory:");

        let connect_options = if in_memory {
            SqliteConnectOptions::new()
                .filename(":memory:")
                .journal_mode(SqliteJournalMode::Memory)
                .busy_timeout(Duration::from_secs(5))
        } else {
            let path = database_url
                .strip_prefix("sqlite://")
                .unwrap_or(database_url);
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
        };

        // A pooled in-memory database opens a separate empty database per
        // connection; pin the pool to one connection so every query sees the
        // same table.
        let pool_size = if in_memory { 1 } else { max_connections };

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(Self { pool })
    }

    /// Ensure the task table exists.
    ///
    /// Issues the `CREATE TABLE IF NOT EXISTS` bootstrap statement, bounded
    /// by a five second deadline. Must be called once at startup before the
    /// server accepts requests; any failure here is fatal to the process.
    ///
    /// # Returns
    /// * `Ok(())` - Table exists
    /// * `Err(TaskError::Database)` - If the statement fails
    /// * `Err(TaskError::Timeout)` - If the deadline elapses
    pub async fn init_schema(&self) -> Result<()> {
        let bootstrap = sqlx::query(CREATE_TASKS_TABLE).execute(&self.pool);

        match tokio::time::timeout(SCHEMA_TIMEOUT, bootstrap).await {
            Ok(result) => {
                result.map_err(sqlx_error_to_task_error)?;
                tracing::info!("task table ready");
                Ok(())
            }
            Err(_) => Err(TaskError::Timeout(SCHEMA_TIMEOUT)),
        }
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, due_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        row_to_task(&row)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, title, description, due_date, created_at, updated_at \
             FROM tasks ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            tasks.push(row_to_task(row)?);
        }

        Ok(tasks)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let result = sqlx::query(
            "SELECT id, title, description, due_date, created_at, updated_at \
             FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: i64, task: NewTask) -> Result<Task> {
        let now = Utc::now();

        // created_at is deliberately absent from the SET list; it is
        // immutable after creation.
        let row = sqlx::query(
            r#"
            UPDATE tasks SET title = ?, description = ?, due_date = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, title, description, due_date, created_at, updated_at
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        match row {
            Some(row) => row_to_task(&row),
            None => Err(TaskError::not_found_id(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        if result.rows_affected() == 0 {
            tracing::debug!(task_id = id, "delete of absent task treated as success");
        }

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
