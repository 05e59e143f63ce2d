//! Request handlers for the five task endpoints.
//!
//! Each handler decodes its input, delegates to the store under a bounded
//! deadline and serializes the result or error to JSON. Non-numeric path ids
//! are rejected by the `Path<i64>` extractor with 400 before any handler
//! body runs; malformed JSON bodies surface as a `JsonRejection` and map to
//! 400 as well.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;
use crate::state::AppState;
use taskd_core::{error::Result as StoreResult, NewTask, Task, TaskError, TaskStore};

/// Run a store operation under the per-request deadline.
///
/// An elapsed deadline drops the operation's future, cancelling the
/// in-flight database call, and surfaces as an internal error.
async fn bounded<T>(
    deadline: Duration,
    operation: impl Future<Output = StoreResult<T>>,
) -> Result<T, ApiError> {
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::from(TaskError::Timeout(deadline))),
    }
}

/// `POST /tasks` - create a task, returning 201 and the stored row.
pub async fn create_task<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    S: TaskStore,
{
    let Json(draft) = payload?;

    let task = bounded(state.op_timeout, state.store.create(draft)).await?;
    tracing::debug!(task_id = task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks` - list every task, id ascending. An empty store yields `[]`.
pub async fn list_tasks<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    S: TaskStore,
{
    let tasks = bounded(state.op_timeout, state.store.list()).await?;

    Ok(Json(tasks))
}

/// `GET /tasks/:id` - fetch one task or 404.
pub async fn get_task<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore,
{
    match bounded(state.op_timeout, state.store.get_by_id(id)).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::not_found(id)),
    }
}

/// `PUT /tasks/:id` - overwrite title/description/due_date. The response
/// carries the original `created_at` and a refreshed `updated_at`.
pub async fn update_task<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    S: TaskStore,
{
    let Json(draft) = payload?;

    let task = bounded(state.op_timeout, state.store.update(id, draft)).await?;
    tracing::debug!(task_id = task.id, "task updated");

    Ok(Json(task))
}

/// `DELETE /tasks/:id` - remove a task. Absent ids still return 204.
pub async fn delete_task<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    S: TaskStore,
{
    bounded(state.op_timeout, state.store.delete(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
