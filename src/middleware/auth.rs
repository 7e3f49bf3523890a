use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Verified caller identity, attached to every protected request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

/// Authorization gate. Every resource route sits behind this layer, so no
/// handler runs (and no query is issued) without a resolved identity.
///
/// Missing or malformed Authorization header -> 401; a token that fails
/// signature or expiry checks -> 403.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = auth::verify_token(&token, &state.config.security.jwt_secret)
        .map_err(|e| ApiError::InvalidToken(format!("invalid or expired token: {}", e)))?;

    request.extensions_mut().insert(AuthUser { user_id: claims.sub });
    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`. Anything other
/// than that exact shape is rejected before the token is even inspected.
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::Unauthenticated("missing Authorization header".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::Unauthenticated("invalid Authorization header".to_string()))?;

    let token = value.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthenticated("Authorization header must use Bearer token format".to_string())
    })?;

    if token.trim().is_empty() {
        return Err(ApiError::Unauthenticated("empty bearer token".to_string()));
    }

    Ok(token.to_string())
}
