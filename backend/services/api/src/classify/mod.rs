pub mod formatters;
pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/classify", post(handlers::post_classify))
        .route("/api/classify/report", post(handlers::post_classify_report))
}
