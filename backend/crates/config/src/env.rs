use copo_common::error::{CopoError, CopoResult};
use serde::Deserialize;
use std::env;

pub const DEFAULT_HISTORY_LIMIT: i64 = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Postgres URL for classification history. When unset, history lives in memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Default tracing filter; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub history_limit: i64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    pub fn from_env() -> CopoResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let history_limit: i64 = get_var_or("HISTORY_LIMIT", &DEFAULT_HISTORY_LIMIT.to_string())
            .parse()
            .map_err(|e| CopoError::Config(format!("invalid HISTORY_LIMIT: {e}")))?;
        if history_limit <= 0 {
            return Err(CopoError::Config(
                "HISTORY_LIMIT must be positive".to_string(),
            ));
        }

        Ok(Self {
            database_url: get_var_opt("DATABASE_URL"),
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "5000")
                .parse()
                .map_err(|e| CopoError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            cors_origins: split_list(&get_var_or("CORS_ORIGINS", "")),
            history_limit,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
