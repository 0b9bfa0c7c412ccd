//! Request handlers and HTTP error mapping.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::models::{CreateReviewRequest, Review, Sentiment};

use super::AppState;

/// Query parameters for `GET /reviews`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional sentiment filter, one of `positive`, `negative`, `neutral`
    sentiment: Option<String>,
}

/// `POST /reviews`: classify and persist a review.
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::validation(format!("invalid request body: {}", e.body_text())))?;

    let length = request.text.chars().count();
    if length > state.max_review_length {
        return Err(AppError::validation(format!(
            "text exceeds maximum length of {} characters (got {length})",
            state.max_review_length
        )));
    }

    let review = state.store.create(&request.text).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// `GET /reviews`: list reviews in id order, optionally filtered.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let filter = query
        .sentiment
        .as_deref()
        .map(Sentiment::from_str)
        .transpose()?;

    let reviews = state.store.list(filter).await?;
    Ok(Json(reviews))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(message) => {
                log::warn!("Request rejected: {message}");
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            AppError::Storage(e) => {
                log::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal database error".to_string(),
                )
            }
            other => {
                log::error!("Unexpected error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "something went wrong".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
