//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use taskhub_core::error::AppError;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email, matched exactly.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Initial password. Strength rules are enforced by the user service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Task creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Runs derive-based validation and reports the first violation.
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {field}"))
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request body".to_string());
        AppError::validation(message)
    })
}
