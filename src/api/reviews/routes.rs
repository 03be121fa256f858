use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::models::AppState;
use crate::api::reviews::handlers::{
    add_review_handler, clear_reviews_handler, delete_review_handler, list_reviews_handler,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reviews",
            get(list_reviews_handler).post(add_review_handler),
        )
        .route("/api/reviews/{id}", delete(delete_review_handler))
        .route("/api/clear", post(clear_reviews_handler))
}
