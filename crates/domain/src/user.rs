//! # ユーザー
//!
//! ユーザーは永続化層が所有しており、このサービスは読み取るだけである。
//! 保存されている値を加工せずに保持し、そのまま JSON に写す。

use serde::{Deserialize, Serialize};

define_uuid_id! {
    /// ユーザー ID
    pub struct UserId;
}

/// ユーザーエンティティ
///
/// `name` と `email` は保存値そのまま（空白の除去や長さの検査はしない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id:    UserId,
    name:  String,
    email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
