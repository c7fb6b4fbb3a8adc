use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::AveragingService;

use super::handlers::{health_handler, numbers_handler, AppState};

pub fn create_router(averaging_service: Arc<AveragingService>) -> Router {
    let state = AppState { averaging_service };

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/numbers/{id}", get(numbers_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
