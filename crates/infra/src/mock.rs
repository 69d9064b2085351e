//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoapp-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
   collections::HashMap,
   sync::{Arc, Mutex},
};

use async_trait::async_trait;
use todoapp_domain::{
   todo::Todo,
   user::User,
   user_todo::{UserWithTodo, left_outer_join},
};
use crate::{
   error::InfraError,
   repository::UserTodoRepository,
   session::{SessionData, SessionManager},
};

// ===== MockUserTodoRepository =====

/// インメモリの UserTodoRepository
///
/// 結合は [`left_outer_join`] で行う。`unavailable()` で作成すると
/// 常にデータベースエラーを返す。
#[derive(Clone, Default)]
pub struct MockUserTodoRepository {
   users:       Arc<Mutex<Vec<User>>>,
   todos:       Arc<Mutex<Vec<Todo>>>,
   unavailable: bool,
}

impl MockUserTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// DB 到達不能を模擬する
   pub fn unavailable() -> Self {
      Self {
         unavailable: true,
         ..Self::default()
      }
   }

   pub fn add_user(&self, user: User) {
      self.users.lock().unwrap().push(user);
   }

   pub fn add_todo(&self, todo: Todo) {
      self.todos.lock().unwrap().push(todo);
   }
}

#[async_trait]
impl UserTodoRepository for MockUserTodoRepository {
   async fn find_all_with_todos(&self) -> Result<Vec<UserWithTodo>, InfraError> {
      if self.unavailable {
         return Err(sqlx::Error::PoolTimedOut.into());
      }
      let users = self.users.lock().unwrap();
      let todos = self.todos.lock().unwrap();
      Ok(left_outer_join(&users, &todos))
   }
}

// ===== MockSessionManager =====

/// インメモリの SessionManager
#[derive(Clone, Default)]
pub struct MockSessionManager {
   sessions:    Arc<Mutex<HashMap<String, SessionData>>>,
   unavailable: bool,
}

impl MockSessionManager {
   pub fn new() -> Self {
      Self::default()
   }

   /// セッションストア到達不能を模擬する
   pub fn unavailable() -> Self {
      Self {
         unavailable: true,
         ..Self::default()
      }
   }

   /// 指定した ID でセッションを登録する
   pub fn insert(&self, session_id: &str, data: SessionData) {
      self
         .sessions
         .lock()
         .unwrap()
         .insert(session_id.to_string(), data);
   }

   fn check_available(&self) -> Result<(), InfraError> {
      if self.unavailable {
         let err: redis::RedisError = (redis::ErrorKind::Io, "接続失敗").into();
         return Err(err.into());
      }
      Ok(())
   }
}

#[async_trait]
impl SessionManager for MockSessionManager {
   async fn get(&self, session_id: &str) -> Result<Option<SessionData>, InfraError> {
      self.check_available()?;
      Ok(self.sessions.lock().unwrap().get(session_id).cloned())
   }
}
