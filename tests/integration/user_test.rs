//! Integration tests for registration.

mod helpers;

use axum::http::StatusCode;

use taskhub_database::store::CredentialStore;

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new();

    let response = app.register("user@example.com", "Str0ng!Pass").await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["statusCode"], 201);
    assert_eq!(response.body["message"], "Create user successfully");
    assert_eq!(response.body["data"]["email"], "user@example.com");
    assert!(response.body["data"]["id"].is_string());
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("passwordHash").is_none());

    let stored = app
        .stores
        .credentials
        .find_by_email("user@example.com")
        .await
        .expect("lookup")
        .expect("stored user");
    assert_ne!(stored.password_hash, "Str0ng!Pass");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new();
    app.register("user@example.com", "Str0ng!Pass").await;

    let response = app.register("user@example.com", "An0ther!Pass").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Email already in use");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = helpers::TestApp::new();

    let response = app.register("not-an-email", "Str0ng!Pass").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
}

#[tokio::test]
async fn test_register_weak_passwords() {
    let app = helpers::TestApp::new();

    for weak in ["Sh0rt!", "alllower1!", "ALLUPPER1!", "NoDigits!!", "NoSymbol12"] {
        let response = app.register("user@example.com", weak).await;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "accepted weak password {weak}"
        );
    }
}
