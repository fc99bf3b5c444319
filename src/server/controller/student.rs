use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::account::{Account, Role, StudentPatchDto, StudentPayloadDto};
use crate::model::api::{ErrorDto, MessageDto};
use crate::server::{
    error::Error,
    model::app::AppState,
    service::account::{AccountForm, AccountService},
};

pub static STUDENT_TAG: &str = "students";

fn form(payload: StudentPayloadDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        field_of_study: payload.field_of_study,
        skills: payload.skills,
        resume: payload.resume,
        ..Default::default()
    }
}

fn patch_form(payload: StudentPatchDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        field_of_study: payload.field_of_study,
        skills: payload.skills,
        resume: payload.resume,
        ..Default::default()
    }
}

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All student accounts", body = Vec<Account>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let accounts = AccountService::new(&state.db).list(Role::Student).await?;

    Ok(Json(accounts))
}

/// Create a student account
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Student created", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .create(Role::Student, form(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student account id")),
    responses(
        (status = 200, description = "The student account", body = Account),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db).get(Role::Student, id).await?;

    Ok(Json(account))
}

/// Fully replace a student's fields
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student account id")),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Student replaced", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .replace(Role::Student, id, form(payload))
        .await?;

    Ok(Json(account))
}

/// Partially update a student
#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student account id")),
    request_body = StudentPatchDto,
    responses(
        (status = 200, description = "Student updated", body = Account),
        (status = 400, description = "Email taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .patch(Role::Student, id, patch_form(payload))
        .await?;

    Ok(Json(account))
}

/// Delete a student account
///
/// Applications and placements referencing the student keep their ids;
/// their embedded student comes back null from then on.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student account id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AccountService::new(&state.db)
        .delete(Role::Student, id)
        .await?;

    Ok(Json(MessageDto::new("Student deleted successfully")))
}
