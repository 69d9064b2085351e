//! # ユーザーと Todo の結合行
//!
//! 一覧 API が返す平坦化された読み取りモデルと、その結合規則を定義する。
//!
//! ## 結合規則（左外部結合）
//!
//! `users LEFT OUTER JOIN todos ON todos.user_id = users.id`
//!
//! - Todo を持つユーザー: (ユーザー, Todo) の組ごとに 1 行。ユーザー項目は行ごとに複製される
//! - Todo を持たないユーザー: `todo: null` の行がちょうど 1 行
//! - 行数 = Todo 件数 + Todo を持たないユーザー数
//!
//! ## JSON 形状
//!
//! ```json
//! [
//!   { "id": "…", "name": "A", "email": "…", "todo": { "id": "…", "userId": "…", "task": "x", "completed": false } },
//!   { "id": "…", "name": "B", "email": "…", "todo": null }
//! ]
//! ```
//!
//! PostgreSQL 実装は SQL の `LEFT OUTER JOIN` で同じ規則を実現する。
//! [`left_outer_join`] はインメモリ実装とテストで使うリファレンス実装。

use serde::{Deserialize, Serialize};

use crate::{todo::Todo, user::User};

/// ユーザー項目と 0 または 1 件の Todo を平坦化した行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithTodo {
    #[serde(flatten)]
    pub user: User,
    pub todo: Option<Todo>,
}

impl UserWithTodo {
    pub fn new(user: User, todo: Option<Todo>) -> Self {
        Self { user, todo }
    }

    /// Todo を持たないユーザーの行か
    pub fn is_unmatched(&self) -> bool {
        self.todo.is_none()
    }
}

/// ユーザーと Todo を左外部結合する
///
/// 出力はユーザーの入力順、同一ユーザー内では Todo の入力順に並ぶ。
/// どのユーザーにも属さない Todo は出力に現れない。
pub fn left_outer_join(users: &[User], todos: &[Todo]) -> Vec<UserWithTodo> {
    users
        .iter()
        .flat_map(|user| {
            let matched: Vec<UserWithTodo> = todos
                .iter()
                .filter(|todo| todo.belongs_to(user.id()))
                .map(|todo| UserWithTodo::new(user.clone(), Some(todo.clone())))
                .collect();

            if matched.is_empty() {
                vec![UserWithTodo::new(user.clone(), None)]
            } else {
                matched
            }
        })
        .collect()
}
