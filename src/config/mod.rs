use serde::{Deserialize, Serialize};
use std::env;

/// Environment-driven configuration, built once at startup and carried in
/// application state rather than a process-wide singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Shared secret the identity provider signs bearer tokens with.
    pub jwt_secret: String,
}

/// Identity provider admin settings. Both fields must be present for account
/// deletion to work; everything else runs without them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub url: Option<String>,
    pub service_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env_parse("PORT", 5000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost:5432/daybook".to_string()),
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 10),
                acquire_timeout_secs: env_parse("DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
            },
            security: SecurityConfig {
                jwt_secret: env::var("JWT_SECRET").unwrap_or_default(),
            },
            provider: ProviderConfig {
                url: env::var("PROVIDER_URL")
                    .ok()
                    .or_else(|| env::var("SUPABASE_URL").ok()),
                service_key: env::var("PROVIDER_SERVICE_KEY")
                    .ok()
                    .or_else(|| env::var("SUPABASE_SERVICE_ROLE_KEY").ok()),
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
