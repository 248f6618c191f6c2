//! Integration tests for login, check, and logout.

mod helpers;

use axum::http::StatusCode;

const EMAIL: &str = "user@example.com";
const PASSWORD: &str = "Str0ng!Pass";

#[tokio::test]
async fn test_register_login_check_logout_flow() {
    let app = helpers::TestApp::new();
    assert_eq!(app.register(EMAIL, PASSWORD).await.status, StatusCode::CREATED);

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(
        login.body,
        serde_json::json!({ "message": "Login successful", "statusCode": 200 })
    );
    let token = login.session_token().expect("session cookie");

    let check = app.request("GET", "/auth/check", None, Some(&token)).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(
        check.body,
        serde_json::json!({ "email": EMAIL, "authenticated": true })
    );

    let logout = app.request("POST", "/auth/logout", None, Some(&token)).await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(
        logout.body,
        serde_json::json!({ "message": "Logout successful", "statusCode": 200 })
    );
    assert_eq!(logout.session_token().as_deref(), Some(""));
    assert!(logout.cookie_attributes().contains(&"max-age=0".to_string()));

    let check = app.request("GET", "/auth/check", None, None).await;
    assert_eq!(check.status, StatusCode::OK);
    assert_eq!(
        check.body,
        serde_json::json!({ "email": "", "authenticated": false })
    );
}

#[tokio::test]
async fn test_login_cookie_attributes() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;

    let login = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    let set_cookie = login.set_cookie.clone().expect("Set-Cookie header");
    assert!(set_cookie.starts_with("access_token="));

    let attributes = login.cookie_attributes();
    assert!(attributes.contains(&"httponly".to_string()));
    assert!(attributes.contains(&"path=/".to_string()));
    assert!(attributes.contains(&"samesite=lax".to_string()));
    assert!(attributes.contains(&"max-age=3600".to_string()));
    assert!(attributes.iter().any(|a| a.starts_with("expires=")));
    assert!(!attributes.contains(&"secure".to_string()));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_identical() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": "Wr0ng!Pass" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": "ghost@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(
        unknown_email.body,
        serde_json::json!({
            "statusCode": 401,
            "error": "Unauthorized",
            "message": "Email not found or password is incorrect",
        })
    );
    assert!(wrong_password.set_cookie.is_none());
    assert!(unknown_email.set_cookie.is_none());
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": "User@Example.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_with_missing_password_is_json_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": EMAIL })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
    assert_eq!(response.body["error"], "Bad Request");
    assert!(
        response.body["message"]
            .as_str()
            .is_some_and(|m| m.contains("password"))
    );
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_logout_without_session_still_clears_cookie() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.session_token().as_deref(), Some(""));
}

#[tokio::test]
async fn test_token_survives_logout_until_expiry() {
    let app = helpers::TestApp::new();
    app.register(EMAIL, PASSWORD).await;
    let token = app.login(EMAIL, PASSWORD).await;

    app.request("POST", "/auth/logout", None, Some(&token)).await;

    // Logout does not revoke; a captured token is still honored.
    let check = app.request("GET", "/auth/check", None, Some(&token)).await;
    assert_eq!(check.body["authenticated"], true);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
