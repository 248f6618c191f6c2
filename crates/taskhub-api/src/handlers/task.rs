//! Task handlers for the authenticated caller.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use taskhub_entity::task::Task;

use crate::dto::request::{CreateTaskRequest, validate_body};
use crate::dto::response::DataResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// GET /tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = state.task_service.list(&caller).await?;
    Ok(Json(DataResponse::ok(tasks)))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<Task>>)> {
    validate_body(&req)?;
    let task = state
        .task_service
        .create(&caller, &req.title, req.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::created("Create task successfully", task)),
    ))
}
