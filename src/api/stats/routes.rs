use axum::{routing::get, Router};

use crate::api::models::AppState;
use crate::api::stats::handlers::stats_handler;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/stats", get(stats_handler))
}
