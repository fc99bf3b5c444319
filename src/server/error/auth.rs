use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{account::Role, api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication token not provided")]
    MissingToken,
    #[error("Invalid or expired authentication token: {reason}")]
    InvalidToken { reason: String },
    #[error("Request reached a guarded route without an authenticated identity")]
    NotAuthenticated,
    #[error("No role could be resolved for {email:?}")]
    RoleNotResolved { email: String },
    #[error("Role {role} is not permitted for this route")]
    RoleNotAllowed { role: Role },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication token not provided")),
            )
                .into_response(),
            Self::InvalidToken { reason } => {
                tracing::debug!(reason = %reason, "rejected bearer token");

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::with_details(
                        "Invalid or expired authentication token",
                        reason,
                    )),
                )
                    .into_response()
            }
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authenticated")),
            )
                .into_response(),
            Self::RoleNotResolved { email } => {
                tracing::debug!(email = %email, "caller has no resolvable role");

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("Access denied: no role assigned")),
                )
                    .into_response()
            }
            Self::RoleNotAllowed { role } => {
                tracing::debug!(role = %role, "caller role rejected by guard");

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new("Access denied: insufficient role")),
                )
                    .into_response()
            }
        }
    }
}
