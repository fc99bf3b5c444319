use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
    /// Carries the parse failure message of a state value, which already
    /// names the accepted values.
    #[error("{0}")]
    InvalidState(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Company must be validated before it can publish offers")]
    CompanyNotValidated,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::EmailTaken(_) | Self::InvalidState(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::CompanyNotValidated => StatusCode::FORBIDDEN,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
