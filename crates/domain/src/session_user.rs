//! # セッションユーザー
//!
//! 認証ステップ（このサービスの外部）がセッションに格納した
//! ユーザー情報の型付き表現。
//!
//! セッションが存在しないリクエストもあるため、利用側では常に
//! `Option<SessionUser>` として扱う。

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// セッションに紐づく認証済みユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id:    UserId,
    pub name:  String,
    pub email: String,
}

impl SessionUser {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
