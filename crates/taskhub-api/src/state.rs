//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use taskhub_auth::jwt::{JwtDecoder, JwtEncoder};
use taskhub_auth::password::{PasswordHasher, PasswordValidator};
use taskhub_auth::session::SessionManager;
use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::store::Stores;
use taskhub_service::{TaskService, UserService};

use crate::cookie::SessionCookie;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Login gate and token verification
    pub session_manager: Arc<SessionManager>,
    /// Session cookie transport
    pub session_cookie: Arc<SessionCookie>,

    // ── Services ─────────────────────────────────────────────
    /// Registration
    pub user_service: Arc<UserService>,
    /// Owner-scoped tasks
    pub task_service: Arc<TaskService>,
}

impl AppState {
    /// Wires auth components and services over the given stores.
    pub fn new(config: Arc<AppConfig>, stores: &Stores) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth));

        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&stores.credentials),
            Arc::clone(&hasher),
            encoder,
            decoder,
        )?);
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            hasher,
            validator,
        ));
        let task_service = Arc::new(TaskService::new(Arc::clone(&stores.tasks)));
        let session_cookie = Arc::new(SessionCookie::new(&config.auth));

        Ok(Self {
            config,
            session_manager,
            session_cookie,
            user_service,
            task_service,
        })
    }
}
