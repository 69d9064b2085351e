//! # ヘルスチェックハンドラ
//!
//! Todo Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（DB / Redis の接続状態を確認）
//!
//! レスポンス型は [`todoapp_shared::HealthResponse`] / [`todoapp_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use redis::aio::ConnectionManager;
use sqlx::PgPool;
use todoapp_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use tokio::task::JoinSet;

/// 個別チェックのタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Todo Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

/// 依存サービス 1 つ分の疎通確認
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
   /// レスポンスの `checks` に使うキー
   fn name(&self) -> &'static str;

   async fn check(&self) -> CheckStatus;
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub checks: Vec<Arc<dyn ReadinessCheck>>,
}

/// Todo Service の Readiness Check エンドポイント
///
/// 登録されたチェックを並行実行する（各 5 秒でタイムアウト）。
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   // 完了しなかったチェックは Error のまま残る
   let mut checks: HashMap<String, CheckStatus> = state
      .checks
      .iter()
      .map(|c| (c.name().to_string(), CheckStatus::Error))
      .collect();

   let mut set = JoinSet::new();
   for check in state.checks.iter().cloned() {
      set.spawn(async move {
         let status = match tokio::time::timeout(CHECK_TIMEOUT, check.check()).await {
            Ok(status) => status,
            Err(_) => {
               tracing::warn!(check = check.name(), "readiness check timed out");
               CheckStatus::Error
            }
         };
         (check.name(), status)
      });
   }

   while let Some(joined) = set.join_next().await {
      match joined {
         Ok((name, status)) => {
            checks.insert(name.to_string(), status);
         }
         Err(e) => tracing::warn!(error = %e, "readiness check task failed"),
      }
   }

   let response = ReadinessResponse::from_checks(checks);
   let http_status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (http_status, Json(response))
}

/// PostgreSQL への接続を `SELECT 1` で確認する
pub struct DatabaseCheck {
   pool: PgPool,
}

impl DatabaseCheck {
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl ReadinessCheck for DatabaseCheck {
   fn name(&self) -> &'static str {
      "database"
   }

   async fn check(&self) -> CheckStatus {
      match todoapp_infra::db::ping(&self.pool).await {
         Ok(()) => CheckStatus::Ok,
         Err(e) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
         }
      }
   }
}

/// Redis への接続を PING で確認する
pub struct RedisCheck {
   conn: ConnectionManager,
}

impl RedisCheck {
   pub fn new(conn: ConnectionManager) -> Self {
      Self { conn }
   }
}

#[async_trait]
impl ReadinessCheck for RedisCheck {
   fn name(&self) -> &'static str {
      "redis"
   }

   async fn check(&self) -> CheckStatus {
      let mut conn = self.conn.clone();
      match redis::cmd("PING").query_async::<String>(&mut conn).await {
         Ok(_) => CheckStatus::Ok,
         Err(e) => {
            tracing::warn!(error = %e, "readiness check: redis ping failed");
            CheckStatus::Error
         }
      }
   }
}
