pub mod models;
pub mod reviews;
pub mod stats;

// Re-exports
pub use models::*;

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
///
/// CORS is wide open so a separately hosted front-end page can call the API
/// directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .merge(reviews::routes())
        .merge(stats::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// Service descriptor (simple, keep here)
pub async fn home_handler() -> Json<ServiceInfo> {
    let endpoints: BTreeMap<String, String> = [
        ("GET /api/reviews", "List all reviews, newest first"),
        ("POST /api/reviews", "Add a new review"),
        ("DELETE /api/reviews/{id}", "Delete a review by id"),
        ("GET /api/stats", "Review statistics"),
        ("POST /api/clear", "Delete all reviews"),
    ]
    .into_iter()
    .map(|(route, what)| (route.to_string(), what.to_string()))
    .collect();

    Json(ServiceInfo {
        status: "ok".to_string(),
        message: "Reviews API".to_string(),
        endpoints,
    })
}
