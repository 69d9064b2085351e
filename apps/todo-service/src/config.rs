//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
   /// バインドアドレス
   pub host:           String,
   /// ポート番号
   pub port:           u16,
   /// データベース接続 URL
   pub database_url:   String,
   /// Redis 接続 URL
   pub redis_url:      String,
   /// 起動時にマイグレーションを適用するか
   pub run_migrations: bool,
}

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 値の形式が不正
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

impl TodoConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の取得関数から設定を読み込む
   ///
   /// テストではプロセス環境を書き換えずに値を与えるために使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup("TODO_PORT") {
         Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "TODO_PORT",
            value,
         })?,
         None => 3000,
      };

      let run_migrations = match lookup("RUN_MIGRATIONS") {
         Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
            name: "RUN_MIGRATIONS",
            value,
         })?,
         None => false,
      };

      Ok(Self {
         host: lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
         port,
         database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
         redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
         run_migrations,
      })
   }
}

fn parse_bool(value: &str) -> Option<bool> {
   match value.to_ascii_lowercase().as_str() {
      "true" | "1" | "yes" => Some(true),
      "false" | "0" | "no" => Some(false),
      _ => None,
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      move |name| map.get(name).cloned()
   }

   #[test]
   fn test_必須項目のみでデフォルト値が適用される() {
      let config = TodoConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")])).unwrap();

      assert_eq!(
         config,
         TodoConfig {
            host:           "0.0.0.0".to_string(),
            port:           3000,
            database_url:   "postgres://db".to_string(),
            redis_url:      "redis://localhost:6379".to_string(),
            run_migrations: false,
         }
      );
   }

   #[test]
   fn test_database_urlが未設定ならmissingエラー() {
      let result = TodoConfig::from_lookup(lookup_from(&[]));

      assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
   }

   #[test]
   fn test_不正なポート番号はinvalidエラー() {
      let result = TodoConfig::from_lookup(lookup_from(&[
         ("DATABASE_URL", "postgres://db"),
         ("TODO_PORT", "http"),
      ]));

      assert_eq!(
         result,
         Err(ConfigError::Invalid {
            name:  "TODO_PORT",
            value: "http".to_string(),
         })
      );
   }

   #[rstest]
   #[case("true", true)]
   #[case("1", true)]
   #[case("YES", true)]
   #[case("false", false)]
   #[case("0", false)]
   fn test_run_migrationsの真偽値を解釈する(#[case] raw: &str, #[case] expected: bool) {
      let config = TodoConfig::from_lookup(lookup_from(&[
         ("DATABASE_URL", "postgres://db"),
         ("RUN_MIGRATIONS", raw),
      ]))
      .unwrap();

      assert_eq!(config.run_migrations, expected);
   }

   #[test]
   fn test_設定した値がそのまま使われる() {
      let config = TodoConfig::from_lookup(lookup_from(&[
         ("DATABASE_URL", "postgres://db"),
         ("TODO_HOST", "127.0.0.1"),
         ("TODO_PORT", "8080"),
         ("REDIS_URL", "redis://cache:6379"),
      ]))
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.port, 8080);
      assert_eq!(config.redis_url, "redis://cache:6379");
   }
}
