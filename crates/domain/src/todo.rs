use crate::errors::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo の識別子（ストアが採番する正の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 保存済みの Todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Todo {
    /// 部分更新を適用します。`None` のフィールドは保持されます。
    /// `completed` はこの操作では変更しません。
    pub fn apply_patch(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    /// 完了にする（冪等）
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

/// まだ ID を持たない新規 Todo
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    pub fn validate(&self) -> Result<(), TodoError> {
        validate_title(&self.title)
    }

    /// 採番済み ID と組み合わせて保存用の Todo を作る
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            completed: false,
        }
    }
}

/// 部分更新のペイロード
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// タイトルは前後の空白を除いて空であってはならない
fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::Validation("Title cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: TodoId(1),
            title: "Buy milk".into(),
            description: Some("2 bottles".into()),
            completed: false,
        }
    }

    #[test]
    fn todo_serializes_with_bare_integer_id_and_null_description() {
        let todo = NewTodo::new("Buy milk", None).into_todo(TodoId(1));
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id":1,"title":"Buy milk","description":null,"completed":false})
        );
    }

    #[test]
    fn blank_titles_are_rejected() {
        for title in ["", " ", "\t\n  "] {
            let err = NewTodo::new(title, None).validate().unwrap_err();
            assert!(matches!(err, TodoError::Validation(_)), "title={title:?}");
        }
        assert!(NewTodo::new(" x ", None).validate().is_ok());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut todo = sample();
        todo.completed = true;
        todo.apply_patch(TodoPatch {
            title: Some("new".into()),
            description: None,
        });
        assert_eq!(todo.title, "new");
        assert_eq!(todo.description.as_deref(), Some("2 bottles"));
        assert!(todo.completed);
    }

    #[test]
    fn patch_applies_empty_title_as_given() {
        let mut todo = sample();
        todo.apply_patch(TodoPatch {
            title: Some(String::new()),
            description: None,
        });
        assert_eq!(todo.title, "");
        assert_eq!(todo.description.as_deref(), Some("2 bottles"));
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: TodoPatch = serde_json::from_str(r#"{"description":"d"}"#).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.description.as_deref(), Some("d"));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut todo = sample();
        todo.complete();
        let once = todo.clone();
        todo.complete();
        assert_eq!(todo, once);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn patch_never_touches_id_or_completed(
                title in proptest::option::of(".{1,32}"),
                description in proptest::option::of(".{0,32}"),
                completed in any::<bool>(),
            ) {
                let mut todo = sample();
                todo.completed = completed;
                let before = todo.clone();
                todo.apply_patch(TodoPatch { title: title.clone(), description: description.clone() });
                prop_assert_eq!(todo.id, before.id);
                prop_assert_eq!(todo.completed, completed);
                prop_assert_eq!(todo.title, title.unwrap_or(before.title));
                prop_assert_eq!(todo.description, description.or(before.description));
            }
        }
    }
}
