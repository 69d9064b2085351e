//! # セッション参照
//!
//! 上流の認証ステップがログイン時に Redis へ書き込んだセッションを読み出す。
//! このサービスはセッションを作成・延長・削除しない。
//!
//! ## Redis キー
//!
//! | キー | 値 |
//! |-----|-----|
//! | `session:{session_id}` | SessionData (JSON) |

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use todoapp_domain::{session_user::SessionUser, user::UserId};

use crate::InfraError;

/// セッションデータ
///
/// Redis に JSON 形式で保存されているセッション情報。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
   user_id: UserId,
   name: String,
   email: String,
   created_at: DateTime<Utc>,
}

impl SessionData {
   /// `created_at` を現在時刻としてセッションデータを組み立てる
   pub fn new(user_id: UserId, name: String, email: String) -> Self {
      Self {
         user_id,
         name,
         email,
         created_at: Utc::now(),
      }
   }

   pub fn user_id(&self) -> &UserId {
      &self.user_id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn email(&self) -> &str {
      &self.email
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   /// リクエストコンテキストに載せるユーザー情報に変換する
   pub fn to_session_user(&self) -> SessionUser {
      SessionUser::new(self.user_id.clone(), self.name.clone(), self.email.clone())
   }
}

/// セッション参照トレイト
#[async_trait]
pub trait SessionManager: Send + Sync {
   /// セッションを取得する
   ///
   /// 存在しない・期限切れのセッションは `Ok(None)`。
   async fn get(&self, session_id: &str) -> Result<Option<SessionData>, InfraError>;
}

/// Redis からセッションを読み出す SessionManager
#[derive(Clone)]
pub struct RedisSessionManager {
   conn: ConnectionManager,
}

impl RedisSessionManager {
   /// `redis_url`（例: `redis://localhost:6379`）に接続する
   pub async fn new(redis_url: &str) -> Result<Self, InfraError> {
      let client = redis::Client::open(redis_url)?;
      let conn = ConnectionManager::new(client).await?;
      Ok(Self { conn })
   }

   /// Readiness Check 用に接続を複製して返す
   pub fn connection(&self) -> ConnectionManager {
      self.conn.clone()
   }

   /// セッション ID から Redis キーを組み立てる
   pub fn session_key(session_id: &str) -> String {
      format!("session:{session_id}")
   }
}

#[async_trait]
impl SessionManager for RedisSessionManager {
   async fn get(&self, session_id: &str) -> Result<Option<SessionData>, InfraError> {
      let mut conn = self.conn.clone();
      let stored: Option<String> = conn.get(Self::session_key(session_id)).await?;

      stored
         .map(|json| serde_json::from_str(&json))
         .transpose()
         .map_err(InfraError::from)
   }
}
