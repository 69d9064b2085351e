//! # ミドルウェア
//!
//! ルーター全体に適用するリクエスト前処理。

pub mod session;

pub use session::{CurrentSessionUser, SESSION_COOKIE_NAME, SessionState, load_session_user};
