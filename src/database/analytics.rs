use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Counts are computed server-side so full row sets never cross the wire.
/// The three queries are independent; the caller may issue them concurrently.

#[derive(Debug, Serialize, FromRow)]
pub struct TaskCounts {
    pub completed: i64,
    pub pending: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct NoteCounts {
    pub total_notes: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct EventCounts {
    pub upcoming: i64,
    pub past: i64,
}

pub async fn task_counts(pool: &PgPool, owner: &str) -> Result<TaskCounts, sqlx::Error> {
    sqlx::query_as::<_, TaskCounts>(
        "SELECT COUNT(*) FILTER (WHERE completed) AS completed, \
                COUNT(*) FILTER (WHERE NOT completed) AS pending \
         FROM tasks WHERE user_id = $1",
    )
    .bind(owner)
    .fetch_one(pool)
    .await
}

pub async fn note_counts(pool: &PgPool, owner: &str) -> Result<NoteCounts, sqlx::Error> {
    sqlx::query_as::<_, NoteCounts>(
        "SELECT COUNT(*) AS total_notes FROM notes WHERE user_id = $1",
    )
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Today counts as upcoming.
pub async fn event_counts(pool: &PgPool, owner: &str) -> Result<EventCounts, sqlx::Error> {
    sqlx::query_as::<_, EventCounts>(
        "SELECT COUNT(*) FILTER (WHERE event_date >= CURRENT_DATE) AS upcoming, \
                COUNT(*) FILTER (WHERE event_date < CURRENT_DATE) AS past \
         FROM events WHERE user_id = $1",
    )
    .bind(owner)
    .fetch_one(pool)
    .await
}
