use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use services::services::class_directory::ClassDirectoryError;
use thiserror::Error;
use tracing::error;

pub const CLASS_LIST_FAILED: &str = "Gagal mengambil data kelas";
pub const DATABASE_UNAVAILABLE: &str = "Database tidak tersedia";

/// JSON body sent with every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    ClassDirectory(#[from] ClassDirectoryError),
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(#[source] sqlx::Error),
}

impl ApiError {
    /// Status code and the user-facing (localized) message.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::ClassDirectory(ClassDirectoryError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, CLASS_LIST_FAILED)
            }
            ApiError::DatabaseUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, DATABASE_UNAVAILABLE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        error!(status = status.as_u16(), error = %self, "Request failed");

        let body = ErrorBody {
            error: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
