use axum::{Router, extract::State, response::Json as ResponseJson, routing::get};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<ResponseJson<HealthResponse>, ApiError> {
    state
        .db()
        .ping()
        .await
        .map_err(ApiError::DatabaseUnavailable)?;

    Ok(ResponseJson(HealthResponse {
        status: "ok".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
