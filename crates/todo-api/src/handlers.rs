use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::{NewTodo, TodoId};

use crate::error::ApiError;
use crate::models::{CreateTodoRequest, HealthBody, UpdateTodoRequest};
use crate::AppState;

type PathId = Result<Path<u64>, PathRejection>;

fn todo_id(path: PathId) -> Result<TodoId, ApiError> {
    let Path(id) = path?;
    Ok(TodoId(id))
}

/// ヘルスチェック
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// POST /v1/todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let new_todo = NewTodo::try_from(req)?;
    let created = state.service.create(new_todo)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /v1/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    path: PathId,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.get(todo_id(path)?)?;
    Ok(Json(todo))
}

/// GET /v1/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let todos = state.service.list()?;
    Ok(Json(todos))
}

/// PUT /v1/todos/{id}（部分更新）
pub async fn update_todo(
    State(state): State<AppState>,
    path: PathId,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = todo_id(path)?;
    let Json(req) = payload?;
    let todo = state.service.update(id, req.into())?;
    Ok(Json(todo))
}

/// DELETE /v1/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    path: PathId,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete(todo_id(path)?)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /v1/todos/{id}/complete
pub async fn complete_todo(
    State(state): State<AppState>,
    path: PathId,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.mark_complete(todo_id(path)?)?;
    Ok(Json(todo))
}
