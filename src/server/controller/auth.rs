use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::model::api::ErrorDto;
use crate::model::auth::{
    DeleteUserResponseDto, LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto,
    VerifyResponseDto,
};
use crate::server::{
    error::Error,
    model::{app::AppState, identity::CurrentIdentity},
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user with the identity provider and the directory
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = RegisterResponseDto),
        (status = 400, description = "Missing or invalid fields, email taken, or provider rejection", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.identity)
        .register(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Resolve the directory record for an email after provider-side login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Directory record found", body = LoginResponseDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "No account for this email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.identity)
        .login(payload)
        .await?;

    Ok(Json(response))
}

/// Return the verified caller together with their directory record
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Caller verified", body = VerifyResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No directory record for the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify(
    State(state): State<AppState>,
    Extension(identity): Extension<CurrentIdentity>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.identity)
        .verify(&identity)
        .await?;

    Ok(Json(response))
}

/// Delete a user from the identity provider and the directory
#[utoipa::path(
    delete,
    path = "/api/auth/delete-user/{externalId}",
    tag = AUTH_TAG,
    params(("externalId" = String, Path, description = "Identity provider subject id")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponseDto),
        (status = 400, description = "Provider rejected the deletion", body = ErrorDto),
        (status = 404, description = "No directory record for this subject", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.identity)
        .delete_user(&external_id)
        .await?;

    Ok(Json(response))
}
