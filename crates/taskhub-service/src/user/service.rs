//! Account registration: password policy, hashing, and persistence.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use taskhub_auth::password::{PasswordHasher, PasswordValidator};
use taskhub_core::error::AppError;
use taskhub_core::types::UserId;
use taskhub_database::store::UserStore;
use taskhub_entity::user::CreateUser;

/// Public view of a newly registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    /// Assigned user ID.
    pub id: UserId,
    /// Registered email.
    pub email: String,
}

/// Creates user accounts.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new account.
    ///
    /// The email is stored exactly as submitted. A taken email fails with
    /// a conflict error from the store.
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisteredUser, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        self.validator.validate(password)?;

        let password_hash = self.hasher.hash_blocking(password).await?;
        let user = self
            .users
            .create(CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
        })
    }
}
