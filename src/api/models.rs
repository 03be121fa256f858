use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::storage::{JsonStore, Review};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

/// Request to add a new review
#[derive(Debug, Deserialize)]
pub struct AddReviewRequest {
    #[serde(default)]
    pub author: Option<String>,
    /// Kept as a raw JSON value: only a strict integer is accepted, and the
    /// framework's number coercion would hide that distinction
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub telegram_id: Option<Value>,
}

impl AddReviewRequest {
    /// Validate the request; first failure wins.
    ///
    /// Returns the parsed rating on success.
    pub fn validate(&self) -> Result<u8, String> {
        if self.author.as_deref().unwrap_or("").is_empty() {
            return Err("author required".to_string());
        }

        let rating = match self.rating.as_ref().and_then(Value::as_i64) {
            None => return Err("valid rating required".to_string()),
            Some(r) if !(1..=5).contains(&r) => {
                return Err("rating must be 1 to 5".to_string());
            }
            Some(r) => r as u8,
        };

        if self.text.as_deref().unwrap_or("").is_empty() {
            return Err("review text required".to_string());
        }

        Ok(rating)
    }
}

/// Response after adding a review
#[derive(Debug, Serialize)]
pub struct AddReviewResponse {
    pub status: String,
    pub message: String,
    pub review: Review,
}

/// Response for delete/clear operations
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Aggregate statistics over the stored reviews
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub average_rating: f64,
    pub ratings_count: BTreeMap<u8, usize>,
    /// Last record in storage order; omitted when the store is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_review: Option<Review>,
}

/// Service descriptor returned from the root route
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: String,
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
