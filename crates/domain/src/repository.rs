//! 永続化の抽象
//!
//! サービス層はこのトレイトだけに依存し、インメモリ実装を
//! DB 実装などへ差し替えてもサービス/ハンドラは変更不要です。

use crate::errors::StoreError;
use crate::todo::{NewTodo, Todo, TodoId};

pub trait TodoRepository: Send + Sync {
    /// ID 未採番のレコードを保存（ストアが ID を採番）
    fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError>;
    /// ID をキーに上書き保存（後勝ち）
    fn save(&self, todo: Todo) -> Result<Todo, StoreError>;
    /// 既存レコードを排他的に書き換えて保存し、更新後を返す
    /// 存在しなければ `None`（レコードは作られない）
    fn update_with(
        &self,
        id: TodoId,
        f: &mut dyn FnMut(&mut Todo),
    ) -> Result<Option<Todo>, StoreError>;
    fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;
    /// 全件取得（順序は実装依存）
    fn find_all(&self) -> Result<Vec<Todo>, StoreError>;
    /// 存在しなければ何もしない
    fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError>;
    fn exists(&self, id: TodoId) -> Result<bool, StoreError>;
}
