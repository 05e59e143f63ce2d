//! Routing definitions for the task API.
//!
//! Binds the five endpoints to their handlers and layers cross-origin
//! headers and request tracing over the whole router.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use taskd_core::TaskStore;

/// Create the router with all endpoints.
///
/// Ids in the path are matched as a single segment and parsed as `i64` by
/// the handlers' `Path` extractor; anything non-numeric is answered with
/// 400 before a handler runs.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: TaskStore + 'static,
{
    Router::new()
        .route(
            "/tasks",
            post(handlers::create_task::<S>).get(handlers::list_tasks::<S>),
        )
        .route(
            "/tasks/:id",
            get(handlers::get_task::<S>)
                .put(handlers::update_task::<S>)
                .delete(handlers::delete_task::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Cross-origin policy: any origin, the five verbs the API serves plus
/// OPTIONS for preflight, and the Authorization/Content-Type headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
