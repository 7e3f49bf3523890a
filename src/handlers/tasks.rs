use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::database::tasks::{self, Task};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::AppState;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
}

/// GET /tasks
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = tasks::list(&state.pool, &user.user_id).await?;
    Ok(Json(rows))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateTask>,
) -> Result<Json<Task>, ApiError> {
    let title = require_text("title", payload.title)?;
    let task = tasks::insert(&state.pool, &user.user_id, &title).await?;
    Ok(Json(task))
}

/// PUT /tasks/:id/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, ApiError> {
    tasks::toggle(&state.pool, &user.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("task not found".to_string()))
}

/// DELETE /tasks/:id - returns the deleted row.
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<Task>, ApiError> {
    tasks::delete(&state.pool, &user.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("task not found".to_string()))
}
