use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::api::models::*;
use crate::storage::Review;

/// List all reviews, newest date first.
///
/// Ordering is a raw string comparison on the date field, not a parsed
/// datetime; records without a date sort last.
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, AppError> {
    let mut reviews = state
        .store
        .load()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    reviews.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(reviews))
}

/// Add a new review
pub async fn add_review_handler(
    State(state): State<AppState>,
    Json(request): Json<AddReviewRequest>,
) -> Result<Json<AddReviewResponse>, AppError> {
    // Validate
    let rating = request.validate().map_err(AppError::BadRequest)?;

    let now = Utc::now();
    let review = Review {
        id: now.timestamp_micros() as f64 / 1_000_000.0,
        author: request.author.unwrap_or_default(),
        rating,
        text: request.text.unwrap_or_default(),
        date: request
            .date
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Micros, true)),
        telegram_id: request.telegram_id,
    };

    let mut reviews = state
        .store
        .load()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    reviews.push(review.clone());
    state
        .store
        .save(&reviews)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(author = %review.author, rating = review.rating, "Review added");

    Ok(Json(AddReviewResponse {
        status: "success".to_string(),
        message: "Review added successfully".to_string(),
        review,
    }))
}

/// Delete a review by its numeric id.
///
/// Matching is exact float equality on the id the caller echoes back;
/// deleting an id that was never assigned succeeds without changes.
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let id: f64 = id
        .parse()
        .map_err(|e| AppError::Internal(format!("invalid review id: {}", e)))?;

    let mut reviews = state
        .store
        .load()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    reviews.retain(|r| r.id != id);
    state
        .store
        .save(&reviews)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(id, "Review deleted");

    Ok(Json(StatusResponse {
        status: "success".to_string(),
        message: "Review deleted".to_string(),
    }))
}

/// Delete all reviews unconditionally
pub async fn clear_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .store
        .save(&[])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("All reviews cleared");

    Ok(Json(StatusResponse {
        status: "success".to_string(),
        message: "All reviews cleared".to_string(),
    }))
}
