use domain::{NewTodo, TodoError, TodoPatch};
use serde::{Deserialize, Serialize};

/// POST /v1/todos リクエスト
/// title 欠落は空タイトルと同じくバリデーションエラー
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<CreateTodoRequest> for NewTodo {
    type Error = TodoError;

    fn try_from(req: CreateTodoRequest) -> Result<Self, Self::Error> {
        let title = req
            .title
            .ok_or_else(|| TodoError::Validation("Title is required".to_string()))?;
        Ok(NewTodo::new(title, req.description))
    }
}

/// PUT /v1/todos/{id} リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoPatch {
            title: req.title,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// サービスの簡易ステータス
    pub status: &'static str,
}
