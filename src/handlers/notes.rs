use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::database::notes::{self, Note};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::AppState;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// GET /notes
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let rows = notes::list(&state.pool, &user.user_id).await?;
    Ok(Json(rows))
}

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Note>, ApiError> {
    let title = require_text("title", payload.title)?;
    let content = require_text("content", payload.content)?;

    let note = notes::insert(&state.pool, &user.user_id, &title, &content).await?;
    Ok(Json(note))
}

/// PUT /notes/:id - full field replacement.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Note>, ApiError> {
    let title = require_text("title", payload.title)?;
    let content = require_text("content", payload.content)?;

    notes::update(&state.pool, &user.user_id, id, &title, &content)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("note not found".to_string()))
}

/// DELETE /notes/:id - returns the deleted row.
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<Note>, ApiError> {
    notes::delete(&state.pool, &user.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("note not found".to_string()))
}
