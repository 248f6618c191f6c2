//! Integration tests for the strict and soft guards.

mod helpers;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{Duration, Utc};

use taskhub_core::error::AppError;
use taskhub_core::result::AppResult;
use taskhub_core::types::UserId;
use taskhub_database::memory::MemoryTaskStore;
use taskhub_database::store::{CredentialStore, Stores, UserStore};
use taskhub_entity::user::{CreateUser, User};

const EMAIL: &str = "user@example.com";
const PASSWORD: &str = "Str0ng!Pass";

fn unauthorized_body() -> serde_json::Value {
    serde_json::json!({
        "statusCode": 401,
        "error": "Unauthorized",
        "message": "Unauthorized",
    })
}

/// User store whose backend is unreachable.
struct FailingUserStore;

#[async_trait]
impl CredentialStore for FailingUserStore {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_by_id(&self, _id: UserId) -> AppResult<Option<User>> {
        Err(AppError::database("connection refused"))
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn create(&self, _user: CreateUser) -> AppResult<User> {
        Err(AppError::database("connection refused"))
    }
}

async fn registered_user_id(app: &helpers::TestApp) -> UserId {
    let response = app.register(EMAIL, PASSWORD).await;
    serde_json::from_value(response.body["data"]["id"].clone()).expect("user id")
}

#[tokio::test]
async fn test_protected_route_without_cookie() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/tasks", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, unauthorized_body());
}

#[tokio::test]
async fn test_protected_route_with_valid_cookie() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;
    let token = app.login(EMAIL, PASSWORD).await;

    let response = app.request("GET", "/tasks", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["statusCode"], 200);
    assert_eq!(response.body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_expired_token_rejected_and_reported_unauthenticated() {
    let app = helpers::TestApp::new();
    let user_id = registered_user_id(&app).await;

    let stale = app
        .encoder()
        .issue_at(user_id, Utc::now() - Duration::hours(2))
        .expect("issue token");

    let tasks = app.request("GET", "/tasks", None, Some(&stale.token)).await;
    assert_eq!(tasks.status, StatusCode::UNAUTHORIZED);
    assert_eq!(tasks.body, unauthorized_body());

    let check = app
        .request("GET", "/auth/check", None, Some(&stale.token))
        .await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(
        check.body,
        serde_json::json!({ "email": "", "authenticated": false })
    );
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;
    let token = app.login(EMAIL, PASSWORD).await;

    let at = token.find('.').expect("payload") + 1;
    let mut bytes = token.into_bytes();
    bytes[at] = if bytes[at] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).expect("ascii token");

    let tasks = app.request("GET", "/tasks", None, Some(&tampered)).await;
    assert_eq!(tasks.status, StatusCode::UNAUTHORIZED);

    let check = app.request("GET", "/auth/check", None, Some(&tampered)).await;
    assert_eq!(check.body["authenticated"], false);
}

#[tokio::test]
async fn test_token_for_unknown_subject_rejected() {
    let app = helpers::TestApp::new();
    let orphan = app.encoder().issue(UserId::new()).expect("issue token");

    let tasks = app.request("GET", "/tasks", None, Some(&orphan.token)).await;
    assert_eq!(tasks.status, StatusCode::UNAUTHORIZED);

    let check = app
        .request("GET", "/auth/check", None, Some(&orphan.token))
        .await;
    assert_eq!(check.body["authenticated"], false);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = helpers::TestApp::new();
    let user_id = registered_user_id(&app).await;

    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "some-other-secret".to_string();
    let forged = taskhub_auth::jwt::JwtEncoder::new(&foreign)
        .expect("build encoder")
        .issue(user_id)
        .expect("issue token");

    let tasks = app.request("GET", "/tasks", None, Some(&forged.token)).await;
    assert_eq!(tasks.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_cookie_rejected() {
    let app = helpers::TestApp::new();

    let tasks = app.request("GET", "/tasks", None, Some("not-a-jwt")).await;
    assert_eq!(tasks.status, StatusCode::UNAUTHORIZED);

    let check = app.request("GET", "/auth/check", None, Some("not-a-jwt")).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(check.body["authenticated"], false);
}

#[tokio::test]
async fn test_tasks_are_scoped_to_caller() {
    let app = helpers::TestApp::new();
    app.register("alice@example.com", PASSWORD).await;
    app.register("bob@example.com", PASSWORD).await;
    let alice = app.login("alice@example.com", PASSWORD).await;
    let bob = app.login("bob@example.com", PASSWORD).await;

    let created = app
        .request(
            "POST",
            "/tasks",
            Some(serde_json::json!({ "title": "Write report" })),
            Some(&alice),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["message"], "Create task successfully");
    assert_eq!(created.body["data"]["status"], "pending");

    let alice_tasks = app.request("GET", "/tasks", None, Some(&alice)).await;
    assert_eq!(alice_tasks.body["data"].as_array().map(Vec::len), Some(1));

    let bob_tasks = app.request("GET", "/tasks", None, Some(&bob)).await;
    assert_eq!(bob_tasks.body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_task_rejects_blank_title() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;
    let token = app.login(EMAIL, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/tasks",
            Some(serde_json::json!({ "title": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_task_without_session_never_runs() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/tasks",
            Some(serde_json::json!({ "title": "Sneaky" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_store_outage_is_not_reported_as_bad_credentials() {
    let healthy = helpers::TestApp::new();
    let token = healthy
        .encoder()
        .issue(UserId::new())
        .expect("issue token")
        .token;

    let app = helpers::TestApp::with_stores(Stores::from_parts(
        FailingUserStore,
        MemoryTaskStore::new(),
    ));

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        login.body,
        serde_json::json!({
            "statusCode": 500,
            "error": "Internal Server Error",
            "message": "Internal server error",
        })
    );
    assert!(login.set_cookie.is_none());

    let tasks = app.request("GET", "/tasks", None, Some(&token)).await;
    assert_eq!(tasks.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(tasks.body["statusCode"], 500);

    let check = app.request("GET", "/auth/check", None, Some(&token)).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(
        check.body,
        serde_json::json!({ "email": "", "authenticated": false })
    );
}
