use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures. Every variable the server reads is
/// named by a literal, so the missing variant borrows statically.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    Missing(&'static str),
    #[error("Invalid PORT value {0:?}, expected a number between 1 and 65535")]
    InvalidPort(String),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
