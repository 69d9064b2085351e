//! # アプリケーション構築
//!
//! DI（リポジトリ・セッション・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ルートはグローバルな登録先を持たず、[`build_app`] の呼び出しごとに
//! [`RouteTable`] を組み立てる。重複登録は [`RouteError`] として返る。

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   extract::{FromRef, OriginalUri},
   http::Method,
   middleware::from_fn_with_state,
};
use todoapp_infra::{SessionManager, repository::UserTodoRepository};
use todoapp_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   error::CoreError,
   handler::{
      ReadinessCheck,
      ReadinessState,
      TodoState,
      add_todo_intent,
      health_check,
      list_users_with_todos,
      readiness_check,
   },
   middleware::{SessionState, load_session_user},
   route_table::{RouteError, RouteTable},
   usecase::TodoListingUseCaseImpl,
};

/// アプリケーションが必要とする外部依存
pub struct AppDependencies {
   pub user_todo_repository: Arc<dyn UserTodoRepository>,
   pub session_manager:      Arc<dyn SessionManager>,
   pub readiness_checks:     Vec<Arc<dyn ReadinessCheck>>,
}

/// ルーター全体で共有する State
///
/// 各ハンドラは `FromRef` で必要な部分だけを取り出す。
#[derive(Clone)]
pub struct AppState {
   todo:      Arc<TodoState>,
   readiness: Arc<ReadinessState>,
}

impl FromRef<AppState> for Arc<TodoState> {
   fn from_ref(state: &AppState) -> Self {
      state.todo.clone()
   }
}

impl FromRef<AppState> for Arc<ReadinessState> {
   fn from_ref(state: &AppState) -> Self {
      state.readiness.clone()
   }
}

/// ルートテーブルを構築する
pub fn route_table() -> Result<RouteTable<AppState>, RouteError> {
   RouteTable::new()
      .route(Method::GET, "/", list_users_with_todos)?
      .route(Method::GET, "/addTodo", add_todo_intent)?
      .route(Method::GET, "/health", health_check)?
      .route(Method::GET, "/health/ready", readiness_check)
}

/// アプリケーションの `Router` を構築する
///
/// レイヤー順（外側から）: Request ID 採番 → Request ID 伝播 → TraceLayer → セッション読み込み
pub fn build_app(deps: AppDependencies) -> Result<Router, RouteError> {
   let state = AppState {
      todo:      Arc::new(TodoState {
         usecase: TodoListingUseCaseImpl::new(deps.user_todo_repository),
      }),
      readiness: Arc::new(ReadinessState {
         checks: deps.readiness_checks,
      }),
   };
   let session_state = SessionState {
      session_manager: deps.session_manager,
   };

   let router = route_table()?
      .into_router()
      .fallback(not_found)
      .layer(from_fn_with_state(session_state, load_session_user))
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
      .with_state(state);

   Ok(router)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> CoreError {
   CoreError::NotFound(uri.path().to_string())
}
