//! # taskhub-api
//!
//! HTTP API layer for TaskHub built on Axum.
//!
//! Provides the auth, user, and task endpoints, the cookie session
//! transport, per-route-group guards, extractors, DTOs, and error mapping.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
