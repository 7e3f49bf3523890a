use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, user_id, title, content, updated_at";

/// All notes owned by the caller, most recently updated first.
pub async fn list(pool: &PgPool, owner: &str) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        "SELECT {COLUMNS} FROM notes WHERE user_id = $1 ORDER BY updated_at DESC"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    owner: &str,
    title: &str,
    content: &str,
) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        "INSERT INTO notes (user_id, title, content) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
    ))
    .bind(owner)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Full field replacement; `updated_at` is refreshed by the same statement.
pub async fn update(
    pool: &PgPool,
    owner: &str,
    id: i32,
    title: &str,
    content: &str,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        "UPDATE notes SET title = $1, content = $2, updated_at = now() \
         WHERE id = $3 AND user_id = $4 RETURNING {COLUMNS}"
    ))
    .bind(title)
    .bind(content)
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, owner: &str, id: i32) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(&format!(
        "DELETE FROM notes WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}
