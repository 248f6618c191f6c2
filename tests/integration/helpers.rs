//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use taskhub_api::{AppState, build_app};
use taskhub_auth::jwt::JwtEncoder;
use taskhub_core::config::{AppConfig, DatabaseProvider};
use taskhub_database::store::Stores;

/// Test application context
pub struct TestApp {
    /// The full application, middleware included
    pub router: Router,
    /// Backing in-memory stores
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        Self::with_stores(Stores::memory())
    }

    /// Create a test application over the given stores
    pub fn with_stores(stores: Stores) -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.hash_memory_kib = 256;
        config.auth.hash_iterations = 1;

        let state = AppState::new(Arc::new(config.clone()), &stores)
            .expect("Failed to build application state");

        Self {
            router: build_app(state),
            stores,
            config,
        }
    }

    /// Encoder sharing the app's signing secret, for forging tokens
    pub fn encoder(&self) -> JwtEncoder {
        JwtEncoder::new(&self.config.auth).expect("build encoder")
    }

    /// Register a user through the API
    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/user",
            Some(serde_json::json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Login and return the session token from `Set-Cookie`
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_token()
            .expect("No session cookie in login response")
    }

    /// Make an HTTP request to the test app, optionally presenting a session token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(
                header::COOKIE,
                format!("{}={}", self.config.auth.cookie_name, token),
            );
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header, if any
    pub set_cookie: Option<String>,
}

impl TestResponse {
    /// Value of the session cookie set by this response
    pub fn session_token(&self) -> Option<String> {
        let pair = self.set_cookie.as_deref()?.split(';').next()?;
        let (_, value) = pair.split_once('=')?;
        Some(value.to_string())
    }

    /// Attributes of the `Set-Cookie` header, lowercased
    pub fn cookie_attributes(&self) -> Vec<String> {
        self.set_cookie
            .as_deref()
            .map(|c| {
                c.split(';')
                    .skip(1)
                    .map(|a| a.trim().to_ascii_lowercase())
                    .collect()
            })
            .unwrap_or_default()
    }
}
