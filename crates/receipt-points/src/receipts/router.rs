use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{ReceiptRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

/// Router builder exposing the submit and lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct ReceiptCreatedView {
    pub(crate) id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PointsView {
    pub(crate) points: u64,
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    axum::Json(submission): axum::Json<ReceiptSubmission>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.process(submission) {
        Ok(id) => {
            let view = ReceiptCreatedView { id: id.0 };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(ReceiptServiceError::Scoring(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, axum::Json(PointsView { points })).into_response(),
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("no receipt found for id {id}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
