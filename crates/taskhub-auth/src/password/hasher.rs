//! Argon2id password hashing and verification.

use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use taskhub_core::config::AuthConfig;
use taskhub_core::error::AppError;

/// Hashes and verifies passwords with Argon2id.
///
/// Each hash gets a fresh random salt, embedded in the PHC string output
/// together with the cost parameters, so verification needs nothing but
/// the stored digest.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Cost parameters used for new hashes.
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher from the configured Argon2 costs.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Checks a plaintext password against a stored digest.
    ///
    /// The digest comparison is constant-time. A digest that cannot be
    /// parsed counts as a mismatch.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password digest is malformed");
                return false;
            }
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool.
    pub async fn hash_blocking(self: &Arc<Self>, password: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(self);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool.
    pub async fn verify_blocking(
        self: &Arc<Self>,
        password: &str,
        digest: &str,
    ) -> Result<bool, AppError> {
        let hasher = Arc::clone(self);
        let password = password.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))
    }
}
