//! # TodoApp インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトとその具体的な実装を提供する。外部システムの詳細を
//! カプセル化し、ユースケース層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: ユーザーと Todo の結合クエリ
//! - **セッション参照**: 上流が Redis に保存したセッションの読み出し
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - [`session`] - Redis セッション参照
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todoapp_infra::{RedisSessionManager, db, repository::PostgresUserTodoRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/todoapp").await?;
//!     let repository = PostgresUserTodoRepository::new(pool);
//!     let sessions = RedisSessionManager::new("redis://localhost:6379").await?;
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
pub use session::{RedisSessionManager, SessionData, SessionManager};
