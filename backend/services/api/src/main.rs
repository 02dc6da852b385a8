mod classify;
mod error;
mod history;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use copo_common::error::CopoResult;
use copo_common::types::ServiceInfo;
use copo_config::{init_tracing, AppConfig};
use copo_db::history::memory_repository::MemoryHistoryRepository;
use copo_db::history::pg_repository::PgHistoryRepository;
use copo_db::history::repositories::HistoryRepository;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub history_repo: Arc<dyn HistoryRepository>,
    pub history_limit: i64,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("copo-api"))
}

/// Any origin when `origins` is empty, otherwise only the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(classify::router())
        .merge(history::router())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

async fn connect_history(url: &str) -> CopoResult<PgHistoryRepository> {
    let pool = copo_db::create_pool(url).await?;
    let repo = PgHistoryRepository::new(pool);
    repo.ensure_schema().await?;
    Ok(repo)
}

/// The in-memory store never keeps more than one listing's worth of entries.
fn memory_history(config: &AppConfig) -> Arc<dyn HistoryRepository> {
    let capacity = usize::try_from(config.history_limit).unwrap_or(1);
    Arc::new(MemoryHistoryRepository::new(capacity))
}

/// Postgres when `DATABASE_URL` is set and reachable, otherwise in-memory history.
async fn history_repository(config: &AppConfig) -> Arc<dyn HistoryRepository> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::info!(backend = "memory", "no DATABASE_URL set, history is ephemeral");
        return memory_history(config);
    };

    match connect_history(url).await {
        Ok(repo) => {
            tracing::info!(backend = "postgres", "history storage ready");
            Arc::new(repo)
        }
        Err(e) => {
            tracing::warn!(error = %e, backend = "memory", "database unavailable, history is ephemeral");
            memory_history(config)
        }
    }
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "copo-api", "starting");

    let state = AppState {
        history_repo: history_repository(&config).await,
        history_limit: config.history_limit,
    };

    let app = build_router(state, &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
