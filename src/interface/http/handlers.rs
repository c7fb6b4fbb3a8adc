use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::application::AveragingService;
use crate::domain::{NumberCategory, UnknownCategory, WindowSnapshot};
use crate::ports::FetchError;

/// Errors a handler can answer with
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid number ID")]
    InvalidCategory(String),

    #[error("Failed to fetch number")]
    Upstream(#[from] FetchError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::InvalidCategory(id) = &self {
            warn!(%id, "Rejected unknown number id");
        }
        (self.status(), Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub averaging_service: Arc<AveragingService>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for /numbers/{id}
#[derive(Debug, Serialize)]
pub struct WindowResponse {
    #[serde(rename = "windowPrevState")]
    pub window_prev_state: Vec<i64>,
    #[serde(rename = "windowCurrState")]
    pub window_curr_state: Vec<i64>,
    pub numbers: Vec<i64>,
    pub avg: String,
}

impl From<WindowSnapshot> for WindowResponse {
    fn from(snapshot: WindowSnapshot) -> Self {
        let avg = snapshot.formatted_average();
        Self {
            window_prev_state: snapshot.previous,
            numbers: snapshot.current.clone(),
            window_curr_state: snapshot.current,
            avg,
        }
    }
}

/// Handler for GET /api/health
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "average-calculator",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// Handler for GET /numbers/{id}
pub async fn numbers_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WindowResponse>, AppError> {
    let category = id
        .parse::<NumberCategory>()
        .map_err(|UnknownCategory(id)| AppError::InvalidCategory(id))?;

    let snapshot = state.averaging_service.refresh(category).await?;

    Ok(Json(WindowResponse::from(snapshot)))
}
