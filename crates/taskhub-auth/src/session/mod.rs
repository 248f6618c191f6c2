//! Login gate and token-to-identity resolution.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
