//! # Todo Service ライブラリ
//!
//! バイナリ（`main.rs`）と統合テストから共有されるモジュールを公開する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - DI とルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラー定義と HTTP レスポンス変換
//! - [`handler`] - HTTP ハンドラ
//! - [`middleware`] - セッション読み込み
//! - [`route_table`] - 重複を拒否するルート登録
//! - [`usecase`] - ユースケース

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod route_table;
pub mod usecase;
