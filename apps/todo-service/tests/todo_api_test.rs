//! Todo Service HTTP API の統合テスト
//!
//! `build_app` で組み立てたルーター全体に対して、インメモリのリポジトリと
//! セッションマネージャを注入してリクエストを送る。

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use todoapp_domain::{
    todo::{Todo, TodoId},
    user::{User, UserId},
};
use todoapp_infra::{
    SessionData,
    mock::{MockSessionManager, MockUserTodoRepository},
};
use todoapp_todo_service::app_builder::{AppDependencies, build_app};
use tower::ServiceExt;
use uuid::Uuid;

fn app(repository: MockUserTodoRepository, sessions: MockSessionManager) -> Router {
    build_app(AppDependencies {
        user_todo_repository: Arc::new(repository),
        session_manager:      Arc::new(sessions),
        readiness_checks:     Vec::new(),
    })
    .unwrap()
}

async fn get(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[tokio::test]
async fn test_get_rootはユーザーとtodoの左外部結合を返す() {
    // Given: Users = [A, B], Todos = [{A, "x"}]
    let repository = MockUserTodoRepository::new();
    let a = UserId::from_uuid(uuid(1));
    repository.add_user(User::new(a.clone(), "A", "a@example.com"));
    repository.add_user(User::new(UserId::from_uuid(uuid(2)), "B", "b@example.com"));
    repository.add_todo(Todo::new(TodoId::from_uuid(uuid(10)), a, "x", false));

    // When
    let (status, body) = get(app(repository, MockSessionManager::new()), "/", None).await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": uuid(1).to_string(),
                "name": "A",
                "email": "a@example.com",
                "todo": {
                    "id": uuid(10).to_string(),
                    "userId": uuid(1).to_string(),
                    "task": "x",
                    "completed": false
                }
            },
            {
                "id": uuid(2).to_string(),
                "name": "B",
                "email": "b@example.com",
                "todo": null
            }
        ])
    );
}

#[tokio::test]
async fn test_get_rootはユーザーがいなければ空配列() {
    let (status, body) = get(
        app(MockUserTodoRepository::new(), MockSessionManager::new()),
        "/",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_rootはdb障害で500と汎用エラーを返す() {
    let (status, body) = get(
        app(MockUserTodoRepository::unavailable(), MockSessionManager::new()),
        "/",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["type"], "https://todoapp.example.com/errors/internal-error");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn test_add_todoはセッションユーザーをそのまま返す() {
    // Given
    let sessions = MockSessionManager::new();
    sessions.insert(
        "abc",
        SessionData::new(
            UserId::from_uuid(uuid(7)),
            "Alice".to_string(),
            "alice@example.com".to_string(),
        ),
    );

    // When
    let (status, body) = get(
        app(MockUserTodoRepository::new(), sessions),
        "/addTodo",
        Some("session_id=abc"),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "isVerify": true,
            "message": "Add Todo",
            "userData": {
                "id": uuid(7).to_string(),
                "name": "Alice",
                "email": "alice@example.com"
            }
        })
    );
}

#[tokio::test]
async fn test_add_todoはセッションがなくても200でuser_dataを省略する() {
    let (status, body) = get(
        app(MockUserTodoRepository::new(), MockSessionManager::new()),
        "/addTodo",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "isVerify": true, "message": "Add Todo" }));
}

#[tokio::test]
async fn test_add_todoはセッションストア障害でも200() {
    let (status, body) = get(
        app(MockUserTodoRepository::new(), MockSessionManager::unavailable()),
        "/addTodo",
        Some("session_id=abc"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("userData").is_none());
}

#[tokio::test]
async fn test_healthはhealthyを返す() {
    let (status, body) = get(
        app(MockUserTodoRepository::new(), MockSessionManager::new()),
        "/health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_未登録のパスは404のproblem_detailsを返す() {
    let (status, body) = get(
        app(MockUserTodoRepository::new(), MockSessionManager::new()),
        "/nowhere",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "/nowhere");
}

#[tokio::test]
async fn test_レスポンスにrequest_idヘッダーが付与される() {
    let response = app(MockUserTodoRepository::new(), MockSessionManager::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id が付与されること");
    assert!(Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}
