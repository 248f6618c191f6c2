//! The authenticated caller attached to a single request.

use serde::{Deserialize, Serialize};

use taskhub_core::types::UserId;
use taskhub_entity::user::User;

/// Who is making the current request.
///
/// Derived from a verified session token on every request and dropped
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's ID.
    pub id: UserId,
    /// The user's email.
    pub email: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}
