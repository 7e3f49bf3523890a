use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use daybook_api::config::AppConfig;
use daybook_api::provider::HttpIdentityAdmin;
use daybook_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every bearer token will be rejected");
    }

    // Lazy connect: the pool exists from startup but connections are only
    // established on first use, so the server can come up while the database
    // is still waking.
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_lazy(&config.database.url)
        .context("invalid DATABASE_URL")?;

    let provider = Arc::new(HttpIdentityAdmin::from_config(&config.provider));
    if !provider.is_configured() {
        tracing::warn!("identity provider admin interface is not configured; account deletion will fail");
    }

    let port = config.server.port;
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config),
        provider,
    };

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("daybook-api listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("store pool closed, bye");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
