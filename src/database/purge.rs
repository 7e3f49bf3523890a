use sqlx::PgPool;

/// Delete every row owned by the caller across all resource tables, in one
/// transaction (account-erase phase 1). Safe to retry; the irreversible
/// provider-side deletion happens after this commits.
pub async fn purge_owner(pool: &PgPool, owner: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM tasks WHERE user_id = $1")
        .bind(owner)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM notes WHERE user_id = $1")
        .bind(owner)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM events WHERE user_id = $1")
        .bind(owner)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
