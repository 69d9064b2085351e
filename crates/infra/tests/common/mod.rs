//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ投入ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// ユーザーを挿入し、ID を返す
///
/// `order` は作成順（created_at のオフセット秒）。
pub async fn insert_user(pool: &PgPool, name: &str, order: i64) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(format!("{id}@example.com"))
    .bind(test_now() + Duration::seconds(order))
    .execute(pool)
    .await
    .expect("ユーザー作成に失敗");
    id
}

/// Todo を挿入し、ID を返す
pub async fn insert_todo(pool: &PgPool, user_id: Uuid, task: &str, order: i64) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query(
        r#"
        INSERT INTO todos (id, user_id, task, completed, created_at)
        VALUES ($1, $2, $3, FALSE, $4)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(task)
    .bind(test_now() + Duration::seconds(order))
    .execute(pool)
    .await
    .expect("Todo 作成に失敗");
    id
}
