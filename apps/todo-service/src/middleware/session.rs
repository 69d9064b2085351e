//! # セッション読み込みミドルウェア
//!
//! Cookie `session_id` からセッションを引き当て、ユーザー情報を
//! [`CurrentSessionUser`] としてリクエスト extensions に格納する。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let session_state = SessionState {
//!     session_manager: session_manager.clone(),
//! };
//!
//! Router::new()
//!     .route("/addTodo", get(add_todo_intent))
//!     .layer(from_fn_with_state(session_state, load_session_user))
//! ```
//!
//! セッションが無いことはエラーではない。Cookie が無い・セッションが
//! 期限切れ・ストアに到達できない、のいずれも `CurrentSessionUser(None)` になる。

use std::{convert::Infallible, sync::Arc};

use axum::{
   body::Body,
   extract::{FromRequestParts, State},
   http::{Request, request::Parts},
   middleware::Next,
   response::Response,
};
use axum_extra::extract::CookieJar;
use todoapp_domain::session_user::SessionUser;
use todoapp_infra::SessionManager;

/// セッション ID を保持する Cookie 名
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// セッション読み込みミドルウェアの状態
#[derive(Clone)]
pub struct SessionState {
   pub session_manager: Arc<dyn SessionManager>,
}

/// 現在のリクエストに紐づくセッションユーザー
///
/// ハンドラの引数に置くと extensions から取り出される。ミドルウェアが
/// 適用されていないルートでは `None` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentSessionUser(pub Option<SessionUser>);

impl<S> FromRequestParts<S> for CurrentSessionUser
where
   S: Send + Sync,
{
   type Rejection = Infallible;

   async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
      Ok(parts
         .extensions
         .get::<CurrentSessionUser>()
         .cloned()
         .unwrap_or_default())
   }
}

/// セッション読み込みミドルウェア
pub async fn load_session_user(
   State(state): State<SessionState>,
   jar: CookieJar,
   mut request: Request<Body>,
   next: Next,
) -> Response {
   let user = match jar.get(SESSION_COOKIE_NAME) {
      Some(cookie) => lookup(state.session_manager.as_ref(), cookie.value()).await,
      None => None,
   };

   request.extensions_mut().insert(CurrentSessionUser(user));
   next.run(request).await
}

async fn lookup(session_manager: &dyn SessionManager, session_id: &str) -> Option<SessionUser> {
   match session_manager.get(session_id).await {
      Ok(Some(data)) => Some(data.to_session_user()),
      Ok(None) => {
         tracing::debug!("セッションが見つかりません");
         None
      }
      Err(e) => {
         tracing::warn!(error = %e, "セッションの取得に失敗しました。未ログインとして扱います");
         None
      }
   }
}
