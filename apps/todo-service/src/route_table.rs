//! # ルートテーブル
//!
//! `(Method, path)` ごとにハンドラをちょうど 1 つ登録するための表。
//!
//! axum の `Router` は重複登録をパニックで報告する。`RouteTable` は
//! 登録済みの組を記録し、重複を [`RouteError::Duplicate`] として返すため、
//! 起動処理はエラーとして扱って終了できる。
//!
//! ```rust,ignore
//! let router = RouteTable::new()
//!     .route(Method::GET, "/", list_users_with_todos)?
//!     .route(Method::GET, "/addTodo", add_todo_intent)?
//!     .into_router();
//! ```

use std::collections::{BTreeMap, HashSet};

use axum::{
   Router,
   handler::Handler,
   http::Method,
   routing::{MethodFilter, MethodRouter, on},
};
use thiserror::Error;

/// ルート登録エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
   /// 同じメソッドとパスの組が既に登録されている
   #[error("ルートが重複しています: {method} {path}")]
   Duplicate { method: Method, path: String },

   /// axum がルーティングできないメソッド
   #[error("サポートされていないメソッドです: {method} {path}")]
   UnsupportedMethod { method: Method, path: String },
}

/// `(Method, path)` → ハンドラの対応表
pub struct RouteTable<S = ()> {
   registered: HashSet<(Method, String)>,
   routes:     BTreeMap<String, MethodRouter<S>>,
}

impl<S> Default for RouteTable<S> {
   fn default() -> Self {
      Self {
         registered: HashSet::new(),
         routes:     BTreeMap::new(),
      }
   }
}

impl<S> RouteTable<S>
where
   S: Clone + Send + Sync + 'static,
{
   pub fn new() -> Self {
      Self::default()
   }

   /// ハンドラを登録する
   ///
   /// 同じパスに別メソッドのハンドラが登録済みであれば 1 つの
   /// `MethodRouter` にまとめる。同じ組が登録済みならエラー。
   pub fn route<H, T>(mut self, method: Method, path: &str, handler: H) -> Result<Self, RouteError>
   where
      H: Handler<T, S>,
      T: 'static,
   {
      let key = (method.clone(), path.to_string());
      if self.registered.contains(&key) {
         return Err(RouteError::Duplicate {
            method,
            path: path.to_string(),
         });
      }

      let filter =
         MethodFilter::try_from(method.clone()).map_err(|_| RouteError::UnsupportedMethod {
            method: method.clone(),
            path:   path.to_string(),
         })?;

      let method_router = on(filter, handler);
      let merged = match self.routes.remove(path) {
         Some(existing) => existing.merge(method_router),
         None => method_router,
      };
      self.routes.insert(path.to_string(), merged);
      self.registered.insert(key);

      tracing::debug!(%method, path, "ルートを登録しました");
      Ok(self)
   }

   /// 指定した組が登録済みか
   pub fn contains(&self, method: &Method, path: &str) -> bool {
      self
         .registered
         .contains(&(method.clone(), path.to_string()))
   }

   /// axum の `Router` に変換する
   pub fn into_router(self) -> Router<S> {
      self
         .routes
         .into_iter()
         .fold(Router::new(), |router, (path, method_router)| {
            router.route(&path, method_router)
         })
   }
}
