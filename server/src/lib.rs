//! Task Server Library
//!
//! This library wires the task CRUD service together: configuration
//! management, store setup and telemetry initialization.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{build_app, create_store, ensure_database_directory};
pub use telemetry::init_telemetry;
