//! User registration handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use taskhub_service::user::RegisteredUser;

use crate::dto::request::{RegisterRequest, validate_body};
use crate::dto::response::DataResponse;
use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /user
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<RegisteredUser>>)> {
    validate_body(&req)?;
    let user = state
        .user_service
        .register(&req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::created("Create user successfully", user)),
    ))
}
