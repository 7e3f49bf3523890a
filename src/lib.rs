use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod provider;

use config::AppConfig;
use provider::IdentityAdmin;

/// Shared application state: the store pool, configuration, and the identity
/// provider's administrative interface. Opened at startup, threaded into
/// every handler, closed at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn IdentityAdmin>,
}

/// Build the full route table. Every resource route sits behind the
/// authorization gate; only `/` and `/health` are public.
pub fn app(state: AppState) -> Router {
    use handlers::{account, analytics, calendar, notes, tasks};

    let protected = Router::new()
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/:id/toggle", put(tasks::toggle))
        .route("/tasks/:id", delete(tasks::remove))
        .route("/notes", get(notes::list).post(notes::create))
        .route("/notes/:id", put(notes::update).delete(notes::remove))
        .route("/calendar", get(calendar::list).post(calendar::create))
        .route("/calendar/:id", put(calendar::update).delete(calendar::remove))
        .route("/analytics", get(analytics::summary))
        .route("/account", delete(account::erase))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(protected)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "Daybook API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health (public)",
            "tasks": "/tasks[/:id][/toggle] (bearer token)",
            "notes": "/notes[/:id] (bearer token)",
            "calendar": "/calendar[/:id] (bearer token)",
            "analytics": "/analytics (bearer token)",
            "account": "DELETE /account (bearer token)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok", "timestamp": now })),
        ),
        Err(e) => {
            tracing::warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "unavailable", "timestamp": now })),
            )
        }
    }
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
