use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::account::{Account, CompanyPatchDto, CompanyPayloadDto, Role};
use crate::model::api::{ErrorDto, MessageDto};
use crate::server::{
    error::Error,
    model::app::AppState,
    service::account::{AccountForm, AccountService},
};

pub static COMPANY_TAG: &str = "companies";

fn form(payload: CompanyPayloadDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        tax_id: payload.tax_id,
        ..Default::default()
    }
}

fn patch_form(payload: CompanyPatchDto) -> AccountForm {
    AccountForm {
        name: payload.name,
        email: payload.email,
        tax_id: payload.tax_id,
        ..Default::default()
    }
}

/// List all companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "All company accounts", body = Vec<Account>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let accounts = AccountService::new(&state.db).list(Role::Company).await?;

    Ok(Json(accounts))
}

/// Create a company account
///
/// New companies start unvalidated and cannot publish offers until a
/// coordinator validates them.
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = CompanyPayloadDto,
    responses(
        (status = 201, description = "Company created", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .create(Role::Company, form(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a company by id
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    responses(
        (status = 200, description = "The company account", body = Account),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db).get(Role::Company, id).await?;

    Ok(Json(account))
}

/// Fully replace a company's fields
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    request_body = CompanyPayloadDto,
    responses(
        (status = 200, description = "Company replaced", body = Account),
        (status = 400, description = "Missing required fields or email taken", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .replace(Role::Company, id, form(payload))
        .await?;

    Ok(Json(account))
}

/// Partially update a company
#[utoipa::path(
    patch,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    request_body = CompanyPatchDto,
    responses(
        (status = 200, description = "Company updated", body = Account),
        (status = 400, description = "Email taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db)
        .patch(Role::Company, id, patch_form(payload))
        .await?;

    Ok(Json(account))
}

/// Delete a company account
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    responses(
        (status = 200, description = "Company deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AccountService::new(&state.db)
        .delete(Role::Company, id)
        .await?;

    Ok(Json(MessageDto::new("Company deleted successfully")))
}

/// Mark a company as validated
///
/// Coordinator-only. Validating an already validated company is a no-op
/// that returns the current record.
#[utoipa::path(
    patch,
    path = "/api/companies/{id}/validate",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    responses(
        (status = 200, description = "Company validated", body = Account),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a coordinator", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let account = AccountService::new(&state.db).validate_company(id).await?;

    Ok(Json(account))
}
