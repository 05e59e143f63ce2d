//! Task Core Library
//!
//! This crate provides the foundational domain models, error types and the
//! persistence trait for the task CRUD service. All other crates depend on
//! the types and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Task, NewTask)
//! - [`error`] - Error types and result handling
//! - [`store`] - Store trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use taskd_core::models::NewTask;
//!
//! let draft = NewTask::new(
//!     "System Architecture".to_string(),
//!     "Design the overall system architecture".to_string(),
//!     None,
//! );
//! assert!(draft.due_date.is_none());
//! ```

pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task};
pub use store::TaskStore;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
