use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::TodoError;
use shared::{AppError, ErrorCategory, ErrorResponse};

/// ハンドラが返すエラー。`AppError` を HTTP レスポンスに変換する
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0.category() {
            ErrorCategory::Client => tracing::warn!(error = %self.0, "Request rejected"),
            ErrorCategory::Server => tracing::error!(error = %self.0, "Request failed"),
        }

        (status, Json(ErrorResponse::new(&self.0))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        ApiError(e.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError(AppError::Validation(format!("Invalid JSON: {}", e.body_text())))
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError(AppError::Validation(format!("Invalid path: {}", e.body_text())))
    }
}
