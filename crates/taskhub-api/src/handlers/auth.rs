//! Auth handlers: login, check, logout.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::dto::request::LoginRequest;
use crate::dto::response::{CheckResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{ApiJson, MaybeAuthUser};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let result = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    let jar = jar.add(state.session_cookie.issue(&result.token));
    Ok((jar, Json(MessageResponse::new(200, "Login successful"))))
}

/// GET /auth/check
pub async fn check(MaybeAuthUser(identity): MaybeAuthUser) -> Json<CheckResponse> {
    Json(match identity {
        Some(identity) => CheckResponse {
            email: identity.email,
            authenticated: true,
        },
        None => CheckResponse {
            email: String::new(),
            authenticated: false,
        },
    })
}

/// POST /auth/logout
///
/// Clears the cookie only. The token itself remains valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    MaybeAuthUser(identity): MaybeAuthUser,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(identity) = identity {
        info!(user_id = %identity.id, "Logout");
    }
    let jar = jar.add(state.session_cookie.clear());
    (jar, Json(MessageResponse::new(200, "Logout successful")))
}
