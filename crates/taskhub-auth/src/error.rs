//! Internal authentication failure taxonomy.
//!
//! Failures are precise internally so they can be logged, and collapse
//! into a small set of indistinguishable client-facing errors.

use thiserror::Error;

use taskhub_core::error::AppError;

/// Message returned for every rejected login, whatever the cause.
pub const LOGIN_REJECTED_MESSAGE: &str = "Email not found or password is incorrect";

/// Message returned when a protected route rejects the caller.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Why a login attempt or a presented token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No user is registered under the submitted email.
    #[error("user not found")]
    UserNotFound,
    /// The user exists but the password does not match.
    #[error("password mismatch")]
    PasswordMismatch,
    /// The token could not be parsed.
    #[error("malformed token")]
    MalformedToken,
    /// The token signature does not match its contents.
    #[error("bad token signature")]
    BadSignature,
    /// The token subject no longer resolves to a user.
    #[error("unknown token subject")]
    UnknownSubject,
    /// The token is authentic but past its expiry.
    #[error("expired token")]
    ExpiredToken,
}

impl AuthFailure {
    /// Whether this failure came from the login gate.
    pub fn is_login_failure(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::PasswordMismatch)
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        if failure.is_login_failure() {
            AppError::authentication(LOGIN_REJECTED_MESSAGE)
        } else {
            AppError::authentication(UNAUTHORIZED_MESSAGE)
        }
    }
}
