//! `AuthUser` / `MaybeAuthUser` extractors.
//!
//! Both read the identity a guard placed in the request extensions; they
//! never look at the cookie themselves.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_auth::Identity;
use taskhub_auth::error::UNAUTHORIZED_MESSAGE;
use taskhub_core::error::AppError;

use crate::error::ApiError;

/// Identity of the caller on a strictly guarded route.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication(UNAUTHORIZED_MESSAGE).into())
    }
}

/// Identity of the caller if one was established.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(parts.extensions.get::<Identity>().cloned()))
    }
}
