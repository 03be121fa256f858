use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::api::models::*;

/// Aggregate statistics over the stored reviews.
///
/// Never fails on an empty store; the empty response simply omits
/// latest_review.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let reviews = state
        .store
        .load()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut ratings_count: BTreeMap<u8, usize> = (1..=5).map(|rating| (rating, 0)).collect();

    if reviews.is_empty() {
        return Ok(Json(StatsResponse {
            total: 0,
            average_rating: 0.0,
            ratings_count,
            latest_review: None,
        }));
    }

    let total = reviews.len();
    let sum: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    let average = sum as f64 / total as f64;

    for review in &reviews {
        if let Some(count) = ratings_count.get_mut(&review.rating) {
            *count += 1;
        }
    }

    // Positional "latest": the most recently appended record still present
    let latest_review = reviews.last().cloned();

    Ok(Json(StatsResponse {
        total,
        average_rating: (average * 100.0).round() / 100.0,
        ratings_count,
        latest_review,
    }))
}
