//! # インフラ層エラー定義
//!
//! PostgreSQL・Redis とのやり取りで起きる失敗を 1 つの型にまとめる。
//! ユースケース層からはデータアクセスエラーとして扱われ、一覧 API では
//! 500 に変換される。
//!
//! [`InfraError`] は種別（[`InfraErrorKind`]）と、生成した時点の
//! [`SpanTrace`] を持つ。SpanTrace はサブスクライバに
//! `tracing_error::ErrorLayer` が登録されている場合にのみ中身を持つ。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// ```ignore
/// if let InfraErrorKind::Database(_) = error.kind() {
///     // DB 到達不能・クエリ失敗
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 接続取得の失敗やクエリエラー
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// セッションストアへの接続・コマンド失敗
    #[error("Redis エラー: {0}")]
    Redis(#[source] redis::RedisError),

    /// セッション JSON の復元失敗
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// 結合結果の行が想定外の形をしている（`todo_id` だけが非 NULL など）
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// 種別から生成し、現在のスパン経路を記録する
    fn capture(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::capture(InfraErrorKind::Unexpected(msg.into()))
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::capture(InfraErrorKind::Database(source))
    }
}

impl From<redis::RedisError> for InfraError {
    fn from(source: redis::RedisError) -> Self {
        Self::capture(InfraErrorKind::Redis(source))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self::capture(InfraErrorKind::Serialization(source))
    }
}
