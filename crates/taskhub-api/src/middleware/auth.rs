//! Session guards, attached per route group with `from_fn_with_state`.
//!
//! Each guard resolves the cookie into a [`CredentialState`], runs its
//! policy, and either stops the request or forwards it with the caller's
//! [`Identity`](taskhub_auth::Identity) in the request extensions.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use taskhub_auth::error::UNAUTHORIZED_MESSAGE;
use taskhub_auth::guard::{self, CredentialState, GuardDecision, GuardPolicy};
use taskhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Strict guard: the handler runs only for a valid credential.
///
/// Store failures during verification surface as internal errors.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = state.session_cookie.read(&jar);
    let credential = state.session_manager.resolve(token.as_deref()).await?;
    apply(guard::strict, credential, request, next).await
}

/// Soft guard: never rejects. The handler runs with or without an identity.
///
/// A store failure is logged and treated as no credential.
pub async fn optional_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = state.session_cookie.read(&jar);
    let credential = match state.session_manager.resolve(token.as_deref()).await {
        Ok(credential) => credential,
        Err(e) => {
            warn!(error = %e, "Credential lookup failed; continuing unauthenticated");
            CredentialState::NoCredential
        }
    };
    apply(guard::soft, credential, request, next).await
}

async fn apply(
    policy: GuardPolicy,
    credential: CredentialState,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let label = credential.label();
    match policy(credential) {
        GuardDecision::Proceed(identity) => {
            request.extensions_mut().insert(identity);
            Ok(next.run(request).await)
        }
        GuardDecision::ProceedAnonymous => Ok(next.run(request).await),
        GuardDecision::Reject(reason) => {
            debug!(
                credential = label,
                reason = ?reason,
                path = %request.uri().path(),
                "Request rejected by guard"
            );
            Err(AppError::authentication(UNAUTHORIZED_MESSAGE).into())
        }
    }
}
