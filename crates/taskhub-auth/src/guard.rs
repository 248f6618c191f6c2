//! Per-request credential states and the guard policies that consume them.
//!
//! Every request re-derives its [`CredentialState`] from the token it
//! presents; nothing carries over between requests. A guard policy maps
//! that state to a [`GuardDecision`] and is chosen per route group when
//! the router is built.

use crate::error::AuthFailure;
use crate::identity::Identity;

/// What the presented credential turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialState {
    /// No session cookie was sent.
    NoCredential,
    /// Malformed token, bad signature, or a subject that no longer exists.
    InvalidCredential,
    /// Authentic token past its expiry.
    ExpiredCredential,
    /// Authentic, unexpired token for an existing user.
    ValidCredential(Identity),
}

impl CredentialState {
    /// Short label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoCredential => "none",
            Self::InvalidCredential => "invalid",
            Self::ExpiredCredential => "expired",
            Self::ValidCredential(_) => "valid",
        }
    }
}

impl From<AuthFailure> for CredentialState {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::ExpiredToken => Self::ExpiredCredential,
            _ => Self::InvalidCredential,
        }
    }
}

/// Why a strict guard refused the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No session cookie.
    MissingCredential,
    /// Unusable token.
    InvalidCredential,
    /// Expired token.
    ExpiredCredential,
}

/// Outcome of running a guard policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Run the handler as this identity.
    Proceed(Identity),
    /// Do not run the handler.
    Reject(RejectReason),
    /// Run the handler without an identity.
    ProceedAnonymous,
}

/// A guard policy: a pure function from credential state to decision.
pub type GuardPolicy = fn(CredentialState) -> GuardDecision;

/// Policy for protected resources: only a valid credential gets through.
pub fn strict(state: CredentialState) -> GuardDecision {
    match state {
        CredentialState::ValidCredential(identity) => GuardDecision::Proceed(identity),
        CredentialState::NoCredential => GuardDecision::Reject(RejectReason::MissingCredential),
        CredentialState::InvalidCredential => {
            GuardDecision::Reject(RejectReason::InvalidCredential)
        }
        CredentialState::ExpiredCredential => {
            GuardDecision::Reject(RejectReason::ExpiredCredential)
        }
    }
}

/// Policy for status endpoints: never rejects, unauthenticated callers run anonymously.
pub fn soft(state: CredentialState) -> GuardDecision {
    match state {
        CredentialState::ValidCredential(identity) => GuardDecision::Proceed(identity),
        _ => GuardDecision::ProceedAnonymous,
    }
}
