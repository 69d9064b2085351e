//! # TodoApp ドメイン層
//!
//! ユーザーと Todo のドメインモデル、およびその結合ルールを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`user::User`], [`todo::Todo`]）
//! - **読み取りモデル**: ユーザーと Todo を平坦化した行（[`user_todo::UserWithTodo`]）
//! - **保存値の尊重**: 永続化層の値を検証・加工せずに保持する
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、Redis）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`user`] - ユーザーエンティティ
//! - [`todo`] - Todo エンティティ
//! - [`user_todo`] - ユーザーと Todo の左外部結合
//! - [`session_user`] - セッションに紐づく認証済みユーザー
//!
//! ## 使用例
//!
//! ```rust
//! use todoapp_domain::{
//!     todo::{Todo, TodoId},
//!     user::{User, UserId},
//!     user_todo::left_outer_join,
//! };
//!
//! let alice = User::new(UserId::new(), "Alice", "alice@example.com");
//! let todo = Todo::new(TodoId::new(), alice.id().clone(), "牛乳を買う", false);
//!
//! let rows = left_outer_join(&[alice], &[todo]);
//! assert_eq!(rows.len(), 1);
//! ```

#[macro_use]
mod macros;

pub mod session_user;
pub mod todo;
pub mod user;
pub mod user_todo;
