use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::database::purge;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::AppState;

/// DELETE /account - two phases, strictly in order: purge the caller's rows
/// from the store, then delete the account at the identity provider.
///
/// If the provider call fails after the purge committed, the identity is
/// orphaned at the provider (account exists, no application data). That case
/// is reported as an error so the client can retry; it is never claimed as
/// success, and the purge is not rolled back.
pub async fn erase(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    purge::purge_owner(&state.pool, &user.user_id).await?;

    state.provider.delete_user(&user.user_id).await?;

    tracing::info!("account erased: {}", user.user_id);
    Ok(Json(json!({ "success": true })))
}
