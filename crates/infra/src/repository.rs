//! # リポジトリ実装
//!
//! ユースケース層が利用するリポジトリトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: このサービスはエンティティを変更しない
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod user_todo_repository;

pub use user_todo_repository::{PostgresUserTodoRepository, UserTodoRepository};
