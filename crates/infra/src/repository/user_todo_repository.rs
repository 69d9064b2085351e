//! # UserTodoRepository
//!
//! ユーザーと Todo を結合して読み出すリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 クエリで取得**: N+1 問題を避けるため `LEFT OUTER JOIN` で一括取得
//! - **Todo なしユーザーの保持**: 結合の右側が存在しない行は `todo: None` に写像
//! - **決定的な並び順**: 同じデータに対して常に同じ順序で返す

use async_trait::async_trait;
use sqlx::PgPool;
use todoapp_domain::{
    todo::{Todo, TodoId},
    user::{User, UserId},
    user_todo::UserWithTodo,
};
use uuid::Uuid;

use crate::error::InfraError;

/// ユーザー・Todo 結合リポジトリトレイト
#[async_trait]
pub trait UserTodoRepository: Send + Sync {
    /// 全ユーザーを Todo と左外部結合して取得する
    ///
    /// # 戻り値
    ///
    /// - Todo を持つユーザー: (ユーザー, Todo) の組ごとに 1 行
    /// - Todo を持たないユーザー: `todo: None` の 1 行
    /// - `Err(_)`: データベースエラー（接続不能、クエリ失敗）
    async fn find_all_with_todos(&self) -> Result<Vec<UserWithTodo>, InfraError>;
}

/// PostgreSQL 実装の UserTodoRepository
#[derive(Debug, Clone)]
pub struct PostgresUserTodoRepository {
    pool: PgPool,
}

impl PostgresUserTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 結合クエリの 1 行
///
/// `todos` 側の列は結合相手がない場合すべて NULL になる。
#[derive(Debug, sqlx::FromRow)]
struct UserTodoRow {
    user_id:        Uuid,
    user_name:      String,
    user_email:     String,
    todo_id:        Option<Uuid>,
    todo_task:      Option<String>,
    todo_completed: Option<bool>,
}

impl TryFrom<UserTodoRow> for UserWithTodo {
    type Error = InfraError;

    fn try_from(row: UserTodoRow) -> Result<Self, Self::Error> {
        let user_id = UserId::from_uuid(row.user_id);
        // 保存値はそのまま写す。空文字や前後の空白も行を欠落させない
        let user = User::new(user_id.clone(), row.user_name, row.user_email);

        let todo = match (row.todo_id, row.todo_task, row.todo_completed) {
            (None, _, _) => None,
            (Some(id), Some(task), Some(completed)) => Some(Todo::new(
                TodoId::from_uuid(id),
                user_id,
                task,
                completed,
            )),
            (Some(id), _, _) => {
                return Err(InfraError::unexpected(format!(
                    "Todo の列が欠落しています: todo_id={id}"
                )));
            }
        };

        Ok(UserWithTodo::new(user, todo))
    }
}

#[async_trait]
impl UserTodoRepository for PostgresUserTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all_with_todos(&self) -> Result<Vec<UserWithTodo>, InfraError> {
        let rows = sqlx::query_as::<_, UserTodoRow>(
            r#"
            SELECT
                u.id        AS user_id,
                u.name      AS user_name,
                u.email     AS user_email,
                t.id        AS todo_id,
                t.task      AS todo_task,
                t.completed AS todo_completed
            FROM users u
            LEFT OUTER JOIN todos t ON t.user_id = u.id
            ORDER BY u.created_at, u.id, t.created_at, t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserWithTodo::try_from).collect()
    }
}
