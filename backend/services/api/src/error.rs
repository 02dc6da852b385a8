use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use copo_common::error::CopoError;

pub struct ApiError(pub CopoError);

impl From<CopoError> for ApiError {
    fn from(err: CopoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CopoError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CopoError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
