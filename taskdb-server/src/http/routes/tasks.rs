//! Task endpoints
//!
//! One store call per handler. Each returns `Result<Envelope<_>, ApiError>`
//! and leaves status selection to [`Operation`].

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::StoreError;
use crate::http::envelope::{Envelope, WithResult};
use crate::http::error::ApiError;
use crate::http::extractors::TaskId;
use crate::http::operation::Operation;
use crate::http::server::AppState;
use crate::models::{ExecResult, NewTask, Task, TaskPatch};

/// Create response body: the generated id next to the submitted fields
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// GET /tasks - all tasks, oldest first
async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<WithResult<Vec<Task>>>, ApiError> {
    let op = Operation::List;
    let rows = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::store(op, e))?;

    Ok(Envelope::result(op, rows))
}

/// GET /tasks/{id} - a single task
async fn get_task(
    State(state): State<Arc<AppState>>,
    TaskId(id): TaskId,
) -> Result<Envelope<WithResult<Task>>, ApiError> {
    let op = Operation::Get;
    let Some(id) = id else {
        return Err(ApiError::NotFound(op));
    };

    let task = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::store(op, e))?
        .ok_or(ApiError::NotFound(op))?;

    tracing::debug!(id = task.id, "Fetched task");
    Ok(Envelope::result(op, task))
}

/// POST /tasks - insert a task
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewTask>, JsonRejection>,
) -> Result<Envelope<Created>, ApiError> {
    let op = Operation::Create;
    let Json(task) = body.map_err(|e| ApiError::body(op, e))?;

    let (title, description) = (task.title.clone(), task.description.clone());
    let result = state
        .store
        .create(task)
        .await
        .map_err(|e| ApiError::store(op, e))?;

    tracing::info!(id = result.insert_id, "Created task");
    Ok(Envelope::new(
        op,
        Created {
            id: result.insert_id,
            title,
            description,
        },
    ))
}

/// PUT /tasks/{id} - overwrite title and/or description
///
/// Reports success even when no row matched; `affectedRows` is 0 then.
async fn update_task(
    State(state): State<Arc<AppState>>,
    TaskId(id): TaskId,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Envelope<WithResult<ExecResult>>, ApiError> {
    let op = Operation::Update;
    let Json(patch) = body.map_err(|e| ApiError::body(op, e))?;
    if patch.is_empty() {
        return Err(ApiError::store(op, StoreError::EmptyPatch));
    }

    let result = match id {
        Some(id) => state
            .store
            .update(id, patch)
            .await
            .map_err(|e| ApiError::store(op, e))?,
        None => ExecResult::default(),
    };

    Ok(Envelope::result(op, result))
}

/// DELETE /tasks/{id} - remove a task
async fn delete_task(
    State(state): State<Arc<AppState>>,
    TaskId(id): TaskId,
) -> Result<Envelope<WithResult<ExecResult>>, ApiError> {
    let op = Operation::Delete;
    let Some(id) = id else {
        return Err(ApiError::NotFound(op));
    };

    let result = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::store(op, e))?;

    if result.affected_rows == 0 {
        return Err(ApiError::NotFound(op));
    }

    tracing::info!(id, "Deleted task");
    Ok(Envelope::result(op, result))
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
