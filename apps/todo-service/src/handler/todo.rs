//! # Todo ハンドラ
//!
//! - `GET /` — 全ユーザーとその Todo の左外部結合を返す
//! - `GET /addTodo` — Todo 追加の意図を受け付け、セッションユーザーをそのまま返す
//!
//! ## レスポンス例
//!
//! ```json
//! [
//!   { "id": "...", "name": "A", "email": "a@example.com",
//!     "todo": { "id": "...", "userId": "...", "task": "x", "completed": false } },
//!   { "id": "...", "name": "B", "email": "b@example.com", "todo": null }
//! ]
//! ```

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use todoapp_domain::{session_user::SessionUser, user_todo::UserWithTodo};

use crate::{error::CoreError, middleware::CurrentSessionUser, usecase::TodoListingUseCaseImpl};

/// Todo API の State
pub struct TodoState {
   pub usecase: TodoListingUseCaseImpl,
}

/// Todo 追加意図のレスポンス
///
/// 書き込みは行わない。セッションが無い場合 `userData` はキーごと省略される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTodoIntentResponse {
   pub is_verify: bool,
   pub message:   &'static str,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub user_data: Option<SessionUser>,
}

impl AddTodoIntentResponse {
   pub fn from_session(user_data: Option<SessionUser>) -> Self {
      Self {
         is_verify: true,
         message: "Add Todo",
         user_data,
      }
   }
}

/// GET /
///
/// 全ユーザーとその Todo の組を返す。
#[tracing::instrument(skip_all)]
pub async fn list_users_with_todos(
   State(state): State<Arc<TodoState>>,
) -> Result<Json<Vec<UserWithTodo>>, CoreError> {
   let rows = state.usecase.list_users_with_todos().await?;
   Ok(Json(rows))
}

/// GET /addTodo
#[tracing::instrument(skip_all, fields(has_session = user.0.is_some()))]
pub async fn add_todo_intent(user: CurrentSessionUser) -> Json<AddTodoIntentResponse> {
   Json(AddTodoIntentResponse::from_session(user.0))
}
