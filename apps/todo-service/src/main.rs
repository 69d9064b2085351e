//! # Todo Service サーバー
//!
//! ユーザーと Todo の一覧、および Todo 追加意図の受け付けを提供する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `REDIS_URL` | No | Redis 接続 URL（デフォルト: `redis://localhost:6379`） |
//! | `RUN_MIGRATIONS` | No | 起動時にマイグレーションを適用する（デフォルト: `false`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todoapp-todo-service
//!
//! # 本番環境
//! TODO_PORT=3000 DATABASE_URL=postgres://... cargo run -p todoapp-todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use todoapp_infra::{RedisSessionManager, db, repository::PostgresUserTodoRepository};
use todoapp_shared::observability::{TracingConfig, init_tracing};
use todoapp_todo_service::{
   app_builder::{AppDependencies, build_app},
   config::TodoConfig,
   handler::{DatabaseCheck, ReadinessCheck, RedisCheck},
};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let tracing_config = TracingConfig::from_env("todo-service");
   init_tracing(&tracing_config);
   let _app_span = tracing_config.app_span().entered();

   let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Todo Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let pool = db::create_pool(&config.database_url)
      .await
      .context("データベース接続に失敗しました")?;
   tracing::info!("データベースに接続しました");

   if config.run_migrations {
      db::run_migrations(&pool)
         .await
         .context("マイグレーションの適用に失敗しました")?;
      tracing::info!("マイグレーションを適用しました");
   }

   let session_manager = RedisSessionManager::new(&config.redis_url)
      .await
      .context("Redis 接続に失敗しました")?;
   tracing::info!("Redis に接続しました");

   let readiness_checks: Vec<Arc<dyn ReadinessCheck>> = vec![
      Arc::new(DatabaseCheck::new(pool.clone())),
      Arc::new(RedisCheck::new(session_manager.connection())),
   ];

   let app = build_app(AppDependencies {
      user_todo_repository: Arc::new(PostgresUserTodoRepository::new(pool)),
      session_manager: Arc::new(session_manager),
      readiness_checks,
   })
   .context("ルーターの構築に失敗しました")?;

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("バインドアドレスが不正です")?;
   let listener = TcpListener::bind(addr)
      .await
      .with_context(|| format!("{addr} にバインドできません"))?;
   tracing::info!("Todo Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
