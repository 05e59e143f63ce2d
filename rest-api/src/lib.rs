//! HTTP surface of the task CRUD service.
//!
//! Maps the five task endpoints onto the [`taskd_core::TaskStore`] trait:
//! decoding JSON requests, bounding every store call with a deadline and
//! encoding results or errors back to JSON. Cross-origin headers and request
//! tracing are applied router-wide.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
