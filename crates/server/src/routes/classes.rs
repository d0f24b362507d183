//! Routes for the student class (kelas) directory.

use axum::{Router, extract::State, response::Json as ResponseJson, routing::get};
use services::services::class_directory::{ClassDirectoryService, ClassList};

use crate::{AppState, error::ApiError};

/// GET /api/kelas
/// List distinct student class labels, sorted ascending
pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<ResponseJson<ClassList>, ApiError> {
    let classes = ClassDirectoryService::list_classes(&state.db().pool).await?;
    Ok(ResponseJson(classes))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/kelas", get(list_classes))
}
