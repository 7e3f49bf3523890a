use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CalendarEvent {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, user_id, title, description, event_date, updated_at";

/// All events owned by the caller, soonest date first.
pub async fn list(pool: &PgPool, owner: &str) -> Result<Vec<CalendarEvent>, sqlx::Error> {
    sqlx::query_as::<_, CalendarEvent>(&format!(
        "SELECT {COLUMNS} FROM events WHERE user_id = $1 ORDER BY event_date ASC, id ASC"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    owner: &str,
    title: &str,
    description: Option<&str>,
    event_date: NaiveDate,
) -> Result<CalendarEvent, sqlx::Error> {
    sqlx::query_as::<_, CalendarEvent>(&format!(
        "INSERT INTO events (user_id, title, description, event_date) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    ))
    .bind(owner)
    .bind(title)
    .bind(description)
    .bind(event_date)
    .fetch_one(pool)
    .await
}

/// Full field replacement; `updated_at` is refreshed by the same statement.
pub async fn update(
    pool: &PgPool,
    owner: &str,
    id: i32,
    title: &str,
    description: Option<&str>,
    event_date: NaiveDate,
) -> Result<Option<CalendarEvent>, sqlx::Error> {
    sqlx::query_as::<_, CalendarEvent>(&format!(
        "UPDATE events SET title = $1, description = $2, event_date = $3, updated_at = now() \
         WHERE id = $4 AND user_id = $5 RETURNING {COLUMNS}"
    ))
    .bind(title)
    .bind(description)
    .bind(event_date)
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

pub async fn delete(
    pool: &PgPool,
    owner: &str,
    id: i32,
) -> Result<Option<CalendarEvent>, sqlx::Error> {
    sqlx::query_as::<_, CalendarEvent>(&format!(
        "DELETE FROM events WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}
