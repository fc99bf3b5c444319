use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::account::{Account, ProfessorPatchDto, ProfessorPayloadDto, Role};
use crate::model::api::{ErrorDto, MessageDto};
use crate::server::{
    error::Error,
    model::app::AppState,
    service::account::{AccountForm, AccountService},
};

pub static PROFESSOR_TAG: &str = "professors";

fn form(payload: ProfessorPayloadDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        department: payload.department,
        ..Default::default()
    }
}

fn patch_form(payload: ProfessorPatchDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        department: payload.department,
        ..Default::default()
    }
}

/// List all professors
#[utoipa::path(
    get,
    path = "/api/professors",
    tag = PROFESSOR_TAG,
    responses(
        (status = 200, description = "All professor accounts", body = Vec<Account>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_professors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let accounts = AccountService::new(&state.db).list(Role::Professor).await?;

    Ok(Json(accounts))
}

/// Create a professor account
#[utoipa::path(
    post,
    path = "/api/professors",
    tag = PROFESSOR_TAG,
    request_body = ProfessorPayloadDto,
    responses(
        (status = 201, description = "Professor created", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_professor(
    State(state): State<AppState>,
    Json(payload): Json<ProfessorPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .create(Role::Professor, form(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a professor by id
#[utoipa::path(
    get,
    path = "/api/professors/{id}",
    tag = PROFESSOR_TAG,
    params(("id" = i32, Path, description = "Professor account id")),
    responses(
        (status = 200, description = "The professor account", body = Account),
        (status = 404, description = "Professor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_professor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .get(Role::Professor, id)
        .await?;

    Ok(Json(account))
}

/// Fully replace a professor's fields
#[utoipa::path(
    put,
    path = "/api/professors/{id}",
    tag = PROFESSOR_TAG,
    params(("id" = i32, Path, description = "Professor account id")),
    request_body = ProfessorPayloadDto,
    responses(
        (status = 200, description = "Professor replaced", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 404, description = "Professor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_professor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProfessorPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .replace(Role::Professor, id, form(payload))
        .await?;

    Ok(Json(account))
}

/// Partially update a professor
#[utoipa::path(
    patch,
    path = "/api/professors/{id}",
    tag = PROFESSOR_TAG,
    params(("id" = i32, Path, description = "Professor account id")),
    request_body = ProfessorPatchDto,
    responses(
        (status = 200, description = "Professor updated", body = Account),
        (status = 400, description = "Email taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Professor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_professor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProfessorPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .patch(Role::Professor, id, patch_form(payload))
        .await?;

    Ok(Json(account))
}

/// Delete a professor account
#[utoipa::path(
    delete,
    path = "/api/professors/{id}",
    tag = PROFESSOR_TAG,
    params(("id" = i32, Path, description = "Professor account id")),
    responses(
        (status = 200, description = "Professor deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Professor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AccountService::new(&state.db)
        .delete(Role::Professor, id)
        .await?;

    Ok(Json(MessageDto::new("Professor deleted successfully")))
}
