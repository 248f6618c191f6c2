//! Session token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use taskhub_core::config::AuthConfig;
use taskhub_core::error::AppError;
use taskhub_core::types::UserId;

use super::claims::Claims;

/// Signs session tokens with the process-wide HMAC secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    /// Fixed token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and its validity window.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWT string.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.token_ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_seconds out of range: {}",
                    config.token_ttl_seconds
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for `user_id` valid from now for one TTL.
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(&self, user_id: UserId, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Session token expiry overflows the calendar"))?;
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }
}
