use axum::extract::{Path, State};
use axum::Json;
use copo_common::error::CopoError;
use copo_db::history::models::HistoryEntry;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

use super::responses::ClearHistoryResponse;

pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let entries = state.history_repo.list(state.history_limit).await?;
    Ok(Json(entries))
}

pub async fn get_history_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryEntry>, ApiError> {
    let entry = state
        .history_repo
        .get(id)
        .await?
        .ok_or_else(|| CopoError::NotFound("history entry not found".to_string()))?;
    Ok(Json(entry))
}

pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<ClearHistoryResponse>, ApiError> {
    let deleted = state.history_repo.clear().await?;
    tracing::info!(deleted, "cleared classification history");
    Ok(Json(ClearHistoryResponse { ok: true, deleted }))
}
