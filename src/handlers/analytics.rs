use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::database::analytics::{self, EventCounts, NoteCounts, TaskCounts};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub tasks: TaskCounts,
    pub notes: NoteCounts,
    pub events: EventCounts,
}

/// GET /analytics - three independent owner-scoped counts, issued
/// concurrently. Any sub-query failure fails the whole request; a partial
/// summary is never returned.
pub async fn summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    let (tasks, notes, events) = tokio::try_join!(
        analytics::task_counts(&state.pool, &user.user_id),
        analytics::note_counts(&state.pool, &user.user_id),
        analytics::event_counts(&state.pool, &user.user_id),
    )
    .map_err(ApiError::Aggregation)?;

    Ok(Json(AnalyticsSummary { tasks, notes, events }))
}
