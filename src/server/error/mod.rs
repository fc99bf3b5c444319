//! Error types for the Practika server.
//!
//! Each domain (authentication, identity provider, directory/domain rules,
//! configuration) has its own `thiserror` enum with an `IntoResponse`
//! implementation mapping it to the HTTP status and JSON body the API
//! promises. The top-level [`Error`] aggregates them so handlers and
//! services can propagate everything with `?`.

pub mod auth;
pub mod config;
pub mod domain;
pub mod identity;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, domain::DomainError, identity::IdentityError,
    },
};

/// Main error type for the Practika server.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified type. `#[from]` conversions keep `?` ergonomic
/// throughout the data, service, and controller layers; the
/// `IntoResponse` implementation turns every variant into the API's
/// `{ "error", "details"? }` JSON shape.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure (token, role guard).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Domain rule violation (validation, uniqueness, unknown records).
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Identity provider failure (verification, admin API calls).
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Internal error indicating inconsistent data or a bug, such as a
    /// directory row whose role-specific column is null for its role.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Domain-specific errors carry their own mappings; anything else is a
/// 500 with the cause logged and a generic body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for operators and returns a generic message to the
/// client so internal details never leak through the API.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
