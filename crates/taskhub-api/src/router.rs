//! Route definitions for the TaskHub HTTP API.
//!
//! Each route group picks its guard here, when the router is built.
//! Handlers never check credentials themselves.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the application router with every route group and its guard.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(session_routes(state.clone()))
        .merge(task_routes(state.clone()))
        .with_state(state)
}

/// Unguarded: login, registration, health.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/user", post(handlers::user::register))
        .route("/health", get(handlers::health::health))
}

/// Soft guard: session status and logout.
fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/check", get(handlers::auth::check))
        .route("/auth/logout", post(handlers::auth::logout))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::optional_auth,
        ))
}

/// Strict guard: the caller's tasks.
fn task_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::task::list_tasks).post(handlers::task::create_task),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}
