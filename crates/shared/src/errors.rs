use domain::TodoError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// アプリケーション全体で使用されるエラー型
#[derive(Debug, Clone, Error)]
pub enum AppError {
    // 入力エラー
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // システムエラー
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// クライアントエラー（4xx相当）
    Client,
    /// サーバーエラー（5xx相当）
    Server,
}

impl From<TodoError> for AppError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::Validation(msg) => AppError::Validation(msg),
            TodoError::NotFound(id) => AppError::NotFound(format!("Todo {id}")),
            TodoError::Store(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl AppError {
    /// エラーコード
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => ErrorCategory::Client,
            AppError::Configuration(_) | AppError::Internal(_) => ErrorCategory::Server,
        }
    }

    /// HTTPステータスコードを取得
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Configuration(_) | AppError::Internal(_) => 500,
        }
    }

    /// クライアント向けメッセージ（5xx の内部詳細は返さない）
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Client => self.to_string(),
            ErrorCategory::Server => "Internal server error".to_string(),
        }
    }
}

/// 標準化されたエラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// エラーコード
    pub code: String,
    /// ユーザー向けメッセージ
    pub message: String,
    /// リクエストID
    pub request_id: String,
    /// タイムスタンプ
    pub timestamp: String,
}

impl ErrorResponse {
    /// AppErrorからErrorResponseを作成
    pub fn from_app_error(error: &AppError, request_id: String) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.user_message(),
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// 新しい ULID をリクエストIDとして採番して作成
    pub fn new(error: &AppError) -> Self {
        Self::from_app_error(error, ulid::Ulid::new().to_string())
    }
}
