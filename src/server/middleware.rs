//! Authentication middleware and role guards.
//!
//! Identity is established by verifying the bearer token against the
//! identity provider, then resolving a role in two steps: the token's
//! role claim when present, otherwise a directory lookup by email. A
//! caller with no directory record keeps an unset role; routes guarded
//! by [`require_role`] reject that, everything else proceeds.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::model::account::Role;
use crate::server::data::account::AccountRepository;
use crate::server::error::{auth::AuthError, Error};
use crate::server::model::{app::AppState, identity::CurrentIdentity};

/// Requires a bearer token, verifies it, and attaches the caller as a
/// [`CurrentIdentity`] request extension.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    let token = bearer_token(&req).ok_or(AuthError::MissingToken)?;

    let verified = state
        .identity
        .verify_id_token(token)
        .await
        .map_err(|err| AuthError::InvalidToken {
            reason: err.to_string(),
        })?;

    let role = match verified.role {
        Some(role) => Some(role),
        None => directory_role(&state, &verified.email).await?,
    };

    req.extensions_mut()
        .insert(CurrentIdentity::from_verified(verified, role));

    Ok(next.run(req).await)
}

/// Same resolution as [`resolve_identity`] but never rejects the
/// request: without a usable token the caller proceeds anonymously.
pub async fn optional_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    let verified = match bearer_token(&req) {
        Some(token) => state.identity.verify_id_token(token).await.ok(),
        None => None,
    };

    if let Some(verified) = verified {
        let role = match verified.role {
            Some(role) => Some(role),
            None => directory_role(&state, &verified.email).await?,
        };

        req.extensions_mut()
            .insert(CurrentIdentity::from_verified(verified, role));
    }

    Ok(next.run(req).await)
}

/// Rejects callers whose resolved role is not in `allowed`.
///
/// Must be layered inside [`resolve_identity`] so the identity extension
/// is present; a request that reaches it without one is treated as
/// unauthenticated.
pub async fn require_role(
    allowed: &[Role],
    req: Request,
    next: Next,
) -> Result<Response, Error> {
    let identity = req
        .extensions()
        .get::<CurrentIdentity>()
        .ok_or(AuthError::NotAuthenticated)?;

    let role = identity.role.ok_or_else(|| AuthError::RoleNotResolved {
        email: identity.email.clone(),
    })?;

    if !allowed.contains(&role) {
        return Err(AuthError::RoleNotAllowed { role }.into());
    }

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn directory_role(state: &AppState, email: &str) -> Result<Option<Role>, Error> {
    let account = AccountRepository::new(&state.db)
        .find_by_email(email)
        .await?;

    Ok(account.and_then(|account| {
        account
            .role
            .parse::<Role>()
            .inspect_err(|_| {
                tracing::warn!(email = %email, role = %account.role, "directory row carries unknown role");
            })
            .ok()
    }))
}
