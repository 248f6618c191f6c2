//! Session lifecycle: password login and per-request token resolution.
//!
//! There is no server-side session table. Logging in mints a token;
//! every later request proves itself by presenting that token again.
//! Logging out is left to the transport (the cookie is cleared), so a
//! token captured earlier stays usable until it expires.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use taskhub_core::error::AppError;
use taskhub_database::store::CredentialStore;

use crate::error::AuthFailure;
use crate::guard::CredentialState;
use crate::identity::Identity;
use crate::jwt::{IssuedToken, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub identity: Identity,
    /// The signed session token.
    pub token: IssuedToken,
}

/// Authenticates credentials and resolves presented tokens.
#[derive(Clone)]
pub struct SessionManager {
    /// User lookups.
    credentials: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token signing.
    encoder: Arc<JwtEncoder>,
    /// Token verification.
    decoder: Arc<JwtDecoder>,
    /// Digest verified when the email is unknown, so both login failure
    /// paths pay for one Argon2 run.
    decoy_digest: Arc<str>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a session manager over the given store and token keys.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Result<Self, AppError> {
        let decoy_digest = hasher.hash(&Uuid::new_v4().to_string())?;
        Ok(Self {
            credentials,
            hasher,
            encoder,
            decoder,
            decoy_digest: decoy_digest.into(),
        })
    }

    /// Performs the login gate:
    ///
    /// 1. Look the user up by email
    /// 2. Verify the password against the stored digest
    /// 3. Issue a session token
    ///
    /// An unknown email and a wrong password produce the same error.
    /// Store failures propagate as internal errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = match self.credentials.find_by_email(email).await? {
            Some(user) => {
                if self
                    .hasher
                    .verify_blocking(password, &user.password_hash)
                    .await?
                {
                    Ok(user)
                } else {
                    Err(AuthFailure::PasswordMismatch)
                }
            }
            None => {
                self.hasher
                    .verify_blocking(password, &self.decoy_digest)
                    .await?;
                Err(AuthFailure::UserNotFound)
            }
        };

        let user = user.map_err(|failure| {
            warn!(reason = %failure, "Login rejected");
            AppError::from(failure)
        })?;

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, expires_at = %token.expires_at, "Login successful");

        Ok(LoginResult {
            identity: Identity::from(&user),
            token,
        })
    }

    /// Resolves the credential presented with a request, if any.
    pub async fn resolve(&self, token: Option<&str>) -> Result<CredentialState, AppError> {
        match token {
            Some(token) if !token.is_empty() => self.verify(token).await,
            _ => Ok(CredentialState::NoCredential),
        }
    }

    /// Verifies a token and maps its subject back to a current user.
    ///
    /// Signature is checked first, then expiry, then the subject lookup.
    pub async fn verify(&self, token: &str) -> Result<CredentialState, AppError> {
        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(failure) => {
                debug!(reason = %failure, "Session token refused");
                return Ok(CredentialState::from(failure));
            }
        };

        match self.credentials.find_by_id(claims.user_id()).await? {
            Some(user) => Ok(CredentialState::ValidCredential(Identity::from(&user))),
            None => {
                debug!(
                    user_id = %claims.user_id(),
                    reason = %AuthFailure::UnknownSubject,
                    "Session token refused"
                );
                Ok(CredentialState::from(AuthFailure::UnknownSubject))
            }
        }
    }
}
