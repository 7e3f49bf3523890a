use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, user_id, title, completed, created_at";

/// All tasks owned by the caller, newest first.
pub async fn list(pool: &PgPool, owner: &str) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, owner: &str, title: &str) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (user_id, title) VALUES ($1, $2) RETURNING {COLUMNS}"
    ))
    .bind(owner)
    .bind(title)
    .fetch_one(pool)
    .await
}

/// Flip `completed` in a single statement. The owner predicate doubles as
/// the authorization check: a mismatched owner affects zero rows and comes
/// back as `None`.
pub async fn toggle(pool: &PgPool, owner: &str, id: i32) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET completed = NOT completed \
         WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, owner: &str, id: i32) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "DELETE FROM tasks WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}
