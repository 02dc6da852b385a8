use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use copo_classifier::{classify, ClassificationResult};
use copo_common::error::CopoError;
use copo_db::history::models::HistoryEntry;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

use super::formatters::format_score_report;
use super::requests::ClassifyRequest;
use super::responses::ClassifyResponse;

/// Malformed bodies get the same `{"error": ...}` shape as every other failure.
fn request_body(
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<ClassifyRequest, CopoError> {
    body.map(|Json(body)| body)
        .map_err(|rejection| CopoError::Validation(rejection.body_text()))
}

fn run_classification(body: &ClassifyRequest) -> Result<ClassificationResult, CopoError> {
    let question = body
        .question_text()
        .ok_or_else(|| CopoError::Validation("Question required".to_string()))?;
    Ok(classify(&question, body.rule_source(), body.map_source()))
}

/// Save failures are logged and swallowed; the caller still gets its result.
async fn save_history(state: &AppState, result: &ClassificationResult) -> Option<Uuid> {
    match state.history_repo.save(HistoryEntry::from_result(result)).await {
        Ok(entry) => {
            tracing::debug!(id = %entry.id, "saved classification");
            Some(entry.id)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to save classification history");
            None
        }
    }
}

pub async fn post_classify(
    State(state): State<AppState>,
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let body = request_body(body)?;
    let result = run_classification(&body)?;

    let saved_id = if body.wants_save() {
        save_history(&state, &result).await
    } else {
        None
    };

    Ok(Json(ClassifyResponse { result, saved_id }))
}

pub async fn post_classify_report(
    body: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let result = run_classification(&request_body(body)?)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format_score_report(&result),
    ))
}
