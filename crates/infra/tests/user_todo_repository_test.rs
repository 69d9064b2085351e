//! UserTodoRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロがテストごとに
//! 専用データベースを作成し、マイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p todoapp-infra --test user_todo_repository_test
//! ```

mod common;

use common::{insert_todo, insert_user};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use todoapp_infra::repository::{PostgresUserTodoRepository, UserTodoRepository};

#[sqlx::test(migrations = "../../migrations")]
async fn test_todoを持つユーザーと持たないユーザーを結合して取得できる(pool: PgPool) {
    // Given: Users = [A, B], Todos = [{A, "x"}]
    let a = insert_user(&pool, "A", 0).await;
    let _b = insert_user(&pool, "B", 1).await;
    let x = insert_todo(&pool, a, "x", 0).await;
    let repo = PostgresUserTodoRepository::new(pool);

    // When
    let rows = repo.find_all_with_todos().await.unwrap();

    // Then
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].user.name(), "A");
    let todo = rows[0].todo.as_ref().expect("A は Todo を持つこと");
    assert_eq!(todo.id().as_uuid(), &x);
    assert_eq!(todo.user_id().as_uuid(), &a);
    assert_eq!(todo.task(), "x");
    assert_eq!(rows[1].user.name(), "B");
    assert!(rows[1].todo.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_複数のtodoを持つユーザーは組ごとに1行になる(pool: PgPool) {
    let a = insert_user(&pool, "A", 0).await;
    insert_todo(&pool, a, "1", 0).await;
    insert_todo(&pool, a, "2", 1).await;
    insert_todo(&pool, a, "3", 2).await;
    let repo = PostgresUserTodoRepository::new(pool);

    let rows = repo.find_all_with_todos().await.unwrap();

    let tasks: Vec<&str> = rows
        .iter()
        .map(|r| r.todo.as_ref().unwrap().task())
        .collect();
    assert_eq!(tasks, vec!["1", "2", "3"]);
    assert!(rows.iter().all(|r| r.user.id().as_uuid() == &a));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_行数はtodo件数とtodoなしユーザー数の和になる(pool: PgPool) {
    let a = insert_user(&pool, "A", 0).await;
    insert_user(&pool, "B", 1).await;
    let c = insert_user(&pool, "C", 2).await;
    insert_user(&pool, "D", 3).await;
    insert_todo(&pool, a, "1", 0).await;
    insert_todo(&pool, a, "2", 1).await;
    insert_todo(&pool, c, "3", 2).await;
    let repo = PostgresUserTodoRepository::new(pool);

    let rows = repo.find_all_with_todos().await.unwrap();

    // Todo 3 件 + Todo なしユーザー 2 人
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.iter().filter(|r| r.is_unmatched()).count(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_データ変更がなければ繰り返し取得しても結果は等しい(pool: PgPool) {
    let a = insert_user(&pool, "A", 0).await;
    insert_user(&pool, "B", 1).await;
    insert_todo(&pool, a, "x", 0).await;
    let repo = PostgresUserTodoRepository::new(pool);

    let first = repo.find_all_with_todos().await.unwrap();
    let second = repo.find_all_with_todos().await.unwrap();

    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_ユーザーがいなければ空の結果を返す(pool: PgPool) {
    let repo = PostgresUserTodoRepository::new(pool);

    let rows = repo.find_all_with_todos().await.unwrap();

    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_空や空白付きの保存値も加工されず全ユーザーが返る(pool: PgPool) {
    // Given: 名前が空白付きのユーザーと、空文字のユーザー（空タスクを持つ）
    let padded = insert_user(&pool, "  Bob ", 0).await;
    let empty = insert_user(&pool, "", 1).await;
    insert_todo(&pool, empty, "", 0).await;
    let repo = PostgresUserTodoRepository::new(pool);

    // When
    let rows = repo.find_all_with_todos().await.unwrap();

    // Then
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].user.id().as_uuid(), &padded);
    assert_eq!(rows[0].user.name(), "  Bob ");
    assert_eq!(rows[1].user.name(), "");
    assert_eq!(rows[1].todo.as_ref().map(|t| t.task()), Some(""));
}
