//! Stateless session token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use taskhub_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthFailure;

/// Verifies session tokens using only their signed contents and the clock.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked after the signature, against an explicit clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature, then expiry, against the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthFailure> {
        self.decode_at(token, Utc::now())
    }

    /// Verifies signature, then expiry, as if the current time were `now`.
    ///
    /// A tampered token is rejected before its claims are looked at, so an
    /// expired-and-tampered token reports [`AuthFailure::BadSignature`].
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthFailure> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => AuthFailure::BadSignature,
                _ => AuthFailure::MalformedToken,
            }
        })?;

        if data.claims.is_expired_at(now) {
            return Err(AuthFailure::ExpiredToken);
        }

        Ok(data.claims)
    }
}
