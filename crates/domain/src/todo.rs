//! # Todo
//!
//! Todo は外部キー `user_id` で所有者の [`User`](crate::user::User) を参照する。
//! 1 人のユーザーは 0 件以上の Todo を持つ。

use serde::{Deserialize, Serialize};

use crate::user::UserId;

define_uuid_id! {
    /// Todo ID
    pub struct TodoId;
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id:        TodoId,
    user_id:   UserId,
    task:      String,
    completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, user_id: UserId, task: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            user_id,
            task: task.into(),
            completed,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// 所有者のユーザー ID（外部キー）
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 指定したユーザーが所有する Todo かを判定する
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
