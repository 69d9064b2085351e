//! # Todo 一覧ユースケース
//!
//! 全ユーザーと Todo の左外部結合を取得する。読み取り専用で冪等。

use std::sync::Arc;

use todoapp_domain::user_todo::UserWithTodo;
use todoapp_infra::repository::UserTodoRepository;

use crate::error::CoreError;

/// Todo 一覧ユースケースの実装
pub struct TodoListingUseCaseImpl {
   repository: Arc<dyn UserTodoRepository>,
}

impl TodoListingUseCaseImpl {
   pub fn new(repository: Arc<dyn UserTodoRepository>) -> Self {
      Self { repository }
   }

   /// 全ユーザーをそれぞれの Todo と組にして返す
   ///
   /// Todo を持たないユーザーは `todo: None` の 1 行として含まれる。
   /// リポジトリの失敗は [`CoreError::Database`] に変換される。
   #[tracing::instrument(skip_all)]
   pub async fn list_users_with_todos(&self) -> Result<Vec<UserWithTodo>, CoreError> {
      let rows = self.repository.find_all_with_todos().await?;

      tracing::debug!(
         row_count = rows.len(),
         unmatched_users = rows.iter().filter(|r| r.is_unmatched()).count(),
         "ユーザーと Todo の結合結果を取得しました"
      );

      Ok(rows)
   }
}
