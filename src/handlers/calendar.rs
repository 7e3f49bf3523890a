use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::database::events::{self, CalendarEvent};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::AppState;

use super::require_text;

#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    /// ISO date, YYYY-MM-DD. Kept as a string so format problems come back
    /// as a 400 instead of a framework rejection.
    pub event_date: Option<String>,
}

fn parse_event_date(value: Option<String>) -> Result<NaiveDate, ApiError> {
    let raw = value.ok_or_else(|| ApiError::Validation("event_date is required".to_string()))?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("invalid event_date: {}", raw)))
}

/// GET /calendar
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let rows = events::list(&state.pool, &user.user_id).await?;
    Ok(Json(rows))
}

/// POST /calendar
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let title = require_text("title", payload.title)?;
    let event_date = parse_event_date(payload.event_date)?;

    let event = events::insert(
        &state.pool,
        &user.user_id,
        &title,
        payload.description.as_deref(),
        event_date,
    )
    .await?;
    Ok(Json(event))
}

/// PUT /calendar/:id - full field replacement.
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<CalendarEvent>, ApiError> {
    let title = require_text("title", payload.title)?;
    let event_date = parse_event_date(payload.event_date)?;

    events::update(
        &state.pool,
        &user.user_id,
        id,
        &title,
        payload.description.as_deref(),
        event_date,
    )
    .await?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("event not found".to_string()))
}

/// DELETE /calendar/:id - returns the deleted row.
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<CalendarEvent>, ApiError> {
    events::delete(&state.pool, &user.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("event not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_event_date(Some("2026-03-14".to_string())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }

    #[test]
    fn missing_date_is_validation_error() {
        assert!(matches!(
            parse_event_date(None),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn malformed_date_is_validation_error() {
        assert!(matches!(
            parse_event_date(Some("14/03/2026".to_string())),
            Err(ApiError::Validation(_))
        ));
    }
}
