use domain::{NewTodo, StoreError, Todo, TodoId, TodoRepository};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// プロセス存続期間だけ保持するインメモリストア（開発/テスト用）
///
/// ID は `AtomicU64` で採番するため、同時に作成しても重複しません。
/// マップのロックはメモリアクセスの間だけ保持します。
#[derive(Debug)]
pub struct InMemoryTodoStore {
    todos: RwLock<BTreeMap<TodoId, Todo>>,
    next_id: AtomicU64,
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// 保存件数
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    fn allocate_id(&self) -> TodoId {
        TodoId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<TodoId, Todo>>, StoreError> {
        self.todos.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<TodoId, Todo>>, StoreError> {
        self.todos.write().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoRepository for InMemoryTodoStore {
    fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let mut todos = self.write()?;
        let stored = todo.into_todo(self.allocate_id());
        todos.insert(stored.id, stored.clone());
        debug!(todo_id = %stored.id, "todo inserted");
        Ok(stored)
    }

    fn save(&self, todo: Todo) -> Result<Todo, StoreError> {
        self.write()?.insert(todo.id, todo.clone());
        debug!(todo_id = %todo.id, "todo saved");
        Ok(todo)
    }

    fn update_with(
        &self,
        id: TodoId,
        f: &mut dyn FnMut(&mut Todo),
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.write()?;
        let Some(todo) = todos.get_mut(&id) else {
            return Ok(None);
        };
        f(todo);
        debug!(todo_id = %id, "todo modified");
        Ok(Some(todo.clone()))
    }

    fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        if self.write()?.remove(&id).is_some() {
            debug!(todo_id = %id, "todo deleted");
        }
        Ok(())
    }

    fn exists(&self, id: TodoId) -> Result<bool, StoreError> {
        Ok(self.read()?.contains_key(&id))
    }
}
