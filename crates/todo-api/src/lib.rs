//! Todo CRUD の HTTP API（axum）
//!
//! ハンドラ → サービス → リポジトリ（トレイト）→ インメモリストア の順に委譲します。
//! 状態はグローバルに持たず、`AppState` としてルータへ注入します。

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

use axum::{
    routing::{get, patch},
    Router,
};
use domain::TodoRepository;
use infrastructure::InMemoryTodoStore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use service::TodoService;

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

impl AppState {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            service: TodoService::new(repository),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryTodoStore::default()))
    }
}

/// インメモリストアでルータを構築
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/todos/:id/complete", patch(handlers::complete_todo));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
