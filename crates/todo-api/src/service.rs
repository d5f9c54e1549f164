//! Todo のユースケース層
//!
//! 入力検証と存在確認を行い、永続化はリポジトリへ委譲します。
//! いずれの操作も失敗時はストアを変更しません。

use domain::{NewTodo, Todo, TodoError, TodoId, TodoPatch, TodoRepository};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// 作成（タイトルが空白のみなら `Validation`）
    pub fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        new_todo.validate()?;
        let created = self.repository.insert(new_todo)?;
        info!(todo_id = %created.id, "todo created");
        Ok(created)
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        debug!(todo_id = %id, "get todo");
        self.repository
            .find_by_id(id)?
            .ok_or(TodoError::NotFound(id))
    }

    pub fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.repository.find_all()?;
        debug!(count = todos.len(), "list todos");
        Ok(todos)
    }

    /// 部分更新（`Some` のフィールドだけ上書き、`completed` は変更しない）
    pub fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, TodoError> {
        let mut patch = Some(patch);
        let updated = self
            .repository
            .update_with(id, &mut |todo| {
                if let Some(patch) = patch.take() {
                    todo.apply_patch(patch);
                }
            })?
            .ok_or(TodoError::NotFound(id))?;
        info!(todo_id = %id, "todo updated");
        Ok(updated)
    }

    pub fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        if !self.repository.exists(id)? {
            return Err(TodoError::NotFound(id));
        }
        self.repository.delete_by_id(id)?;
        info!(todo_id = %id, "todo deleted");
        Ok(())
    }

    /// 完了にする（冪等）
    pub fn mark_complete(&self, id: TodoId) -> Result<Todo, TodoError> {
        let completed = self
            .repository
            .update_with(id, &mut |todo| todo.complete())?
            .ok_or(TodoError::NotFound(id))?;
        info!(todo_id = %id, "todo completed");
        Ok(completed)
    }
}
