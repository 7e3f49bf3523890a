// HTTP API error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

/// API error surface. Every failure a handler can produce maps to one of
/// these kinds; all of them render as `{"error": <message>}` with the
/// matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 - no usable bearer token was presented.
    #[error("{0}")]
    Unauthenticated(String),

    /// 403 - a token was presented but failed signature or expiry checks.
    #[error("{0}")]
    InvalidToken(String),

    /// 400 - a required field is missing or empty after trimming.
    #[error("{0}")]
    Validation(String),

    /// 404 - the row does not exist for this caller. Rows owned by someone
    /// else intentionally produce the same error.
    #[error("{0}")]
    NotFound(String),

    /// 500 - one of the analytics sub-queries failed; no partial summary
    /// is returned.
    #[error("failed to compute analytics summary")]
    Aggregation(#[source] sqlx::Error),

    /// 500 - the identity provider rejected the account deletion. Store rows
    /// may already be gone at this point.
    #[error("account deletion failed: {0}")]
    AccountDeletion(String),

    /// 500 - generic store failure.
    #[error("an internal storage error occurred")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Aggregation(_) | ApiError::AccountDeletion(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::AccountDeletion(format!("identity provider deletion failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the underlying cause for 500s; the client only sees the
        // Display message, which never carries query or connection detail.
        match &self {
            ApiError::Store(err) => tracing::error!("store error: {}", err),
            ApiError::Aggregation(err) => tracing::error!("analytics sub-query failed: {}", err),
            ApiError::AccountDeletion(msg) => tracing::error!("{}", msg),
            _ => {}
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
