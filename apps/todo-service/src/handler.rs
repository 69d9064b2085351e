//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ロジックはユースケースに委譲

pub mod health;
pub mod todo;

pub use health::{
   DatabaseCheck,
   ReadinessCheck,
   ReadinessState,
   RedisCheck,
   health_check,
   readiness_check,
};
pub use todo::{AddTodoIntentResponse, TodoState, add_todo_intent, list_users_with_todos};
