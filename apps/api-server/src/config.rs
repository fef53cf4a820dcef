//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // DATABASE_URL wins over the discrete DB_* variables.
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            DatabaseConfig::postgres_url(
                &var_or("DB_HOST", "localhost"),
                parse_or("DB_PORT", 5432),
                &var_or("DB_NAME", "blogdb"),
                &var_or("DB_USER", "postgres"),
                &var_or("DB_PASSWORD", "password"),
            )
        });

        Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_or("PORT", 5000),
            database: DatabaseConfig {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
                min_connections: parse_or("DB_MIN_CONNECTIONS", 1),
            },
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
