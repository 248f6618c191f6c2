//! # taskhub-auth
//!
//! Credential-based authentication and per-request authorization for
//! TaskHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and registration policy
//! - `jwt`: session token claims, issuing, and stateless verification
//! - `session`: login gate and token-to-identity resolution
//! - `guard`: per-request credential states and guard policies
//! - `error`: internal failure taxonomy and its external collapse

pub mod error;
pub mod guard;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod session;

pub use error::AuthFailure;
pub use guard::{CredentialState, GuardDecision, GuardPolicy, RejectReason};
pub use identity::Identity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{LoginResult, SessionManager};
