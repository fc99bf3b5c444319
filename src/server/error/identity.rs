use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum IdentityError {
    /// Transport-level failure reaching the identity provider.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The provider answered with a non-success status, typically because
    /// the email is already registered or the payload was malformed.
    #[error("Identity provider rejected the request: {message}")]
    Rejected { status: u16, message: String },
    /// An id token failed signature, audience, issuer, or expiry checks.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    /// The token names a signing key the provider key set does not carry,
    /// even after a refresh.
    #[error("Signing key {0:?} is not in the identity provider key set")]
    UnknownKey(String),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected { status, message } => {
                if status >= 500 {
                    return InternalServerError(format!(
                        "identity provider returned {}: {}",
                        status, message
                    ))
                    .into_response();
                }

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::with_details(
                        "Identity provider rejected the request",
                        message,
                    )),
                )
                    .into_response()
            }
            Self::Token(err) => {
                tracing::debug!(error = %err, "id token failed verification");

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::with_details(
                        "Invalid or expired authentication token",
                        err.to_string(),
                    )),
                )
                    .into_response()
            }
            Self::UnknownKey(kid) => {
                tracing::debug!(kid = %kid, "id token signed with unknown key");

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Invalid or expired authentication token")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
