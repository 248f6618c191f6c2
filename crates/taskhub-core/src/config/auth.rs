//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Longest accepted session token lifetime (ten years).
pub const MAX_TOKEN_TTL_SECONDS: u64 = 10 * 365 * 86_400;

/// Authentication, session cookie, and password hashing configuration.
///
/// Loaded once at startup and shared read-only by every component that
/// signs, verifies, or transports session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token lifetime in seconds. Also the cookie lifetime.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// `SameSite` attribute of the session cookie.
    #[serde(default)]
    pub cookie_same_site: SameSitePolicy,
    /// Minimum password length at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSitePolicy {
    /// `SameSite=Strict`
    Strict,
    /// `SameSite=Lax`
    #[default]
    Lax,
    /// `SameSite=None` (requires `Secure` in modern browsers)
    None,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_seconds: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            cookie_same_site: SameSitePolicy::default(),
            password_min_length: default_password_min(),
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_jwt_secret() -> String {
    super::PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_cookie_name() -> String {
    "access_token".to_string()
}

fn default_password_min() -> usize {
    8
}

// Same values as `argon2::Params::DEFAULT_*`.
fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
