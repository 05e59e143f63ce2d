//! Database crate for the task CRUD service
//!
//! This crate provides the SQLite implementation of the TaskStore trait,
//! offering task persistence with connection pooling and error mapping.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Idempotent schema bootstrap at startup
//! - Connection pooling sized from configuration
//! - In-memory database support for tests
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskd_database::SqliteTaskStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create store (in-memory for testing)
//!     let store = SqliteTaskStore::new(":memory:", 5).await?;
//!
//!     // Ensure the task table exists
//!     store.init_schema().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskStore;

// Re-export commonly used types from taskd-core for convenience
pub use taskd_core::{
    error::{Result, TaskError},
    models::{NewTask, Task},
    store::TaskStore,
};
