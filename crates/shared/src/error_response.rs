//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! このサービスが返すエラーは 2 種類のみ: 未登録パスの 404 と、
//! データアクセス失敗の 500。種類ごとの `type` URI・`title`・`status` は
//! [`ProblemKind`] が一箇所で決める。

use serde::{Deserialize, Serialize};

const ERROR_TYPE_BASE: &str = "https://todoapp.example.com/errors";

/// 返しうる問題の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
   NotFound,
   InternalError,
}

impl ProblemKind {
   fn slug(self) -> &'static str {
      match self {
         Self::NotFound => "not-found",
         Self::InternalError => "internal-error",
      }
   }

   fn title(self) -> &'static str {
      match self {
         Self::NotFound => "Not Found",
         Self::InternalError => "Internal Server Error",
      }
   }

   pub fn status(self) -> u16 {
      match self {
         Self::NotFound => 404,
         Self::InternalError => 500,
      }
   }
}

/// エラーレスポンス本体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   pub fn of(kind: ProblemKind, detail: impl Into<String>) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{}", kind.slug()),
         title:      kind.title().to_string(),
         status:     kind.status(),
         detail:     detail.into(),
      }
   }

   /// `detail` には要求されたパスを入れる
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::of(ProblemKind::NotFound, detail)
   }

   /// detail は固定文言。接続先やクエリなどの内部情報は含めない
   pub fn internal_error() -> Self {
      Self::of(ProblemKind::InternalError, "内部エラーが発生しました")
   }
}
