use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::api::{ErrorDto, MessageDto};
use crate::model::application::{
    ApplicationDetailDto, ApplicationDto, ApplicationPayloadDto, ApplicationStateDto,
};
use crate::server::{error::Error, model::app::AppState, service::application::ApplicationService};

pub static APPLICATION_TAG: &str = "applications";

/// List all applications with student and offer embedded
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "All applications, newest first", body = Vec<ApplicationDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db).list().await?;

    Ok(Json(applications))
}

/// Submit an application to an offer
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = ApplicationPayloadDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Missing required fields or invalid state", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<ApplicationPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// List one student's applications
#[utoipa::path(
    get,
    path = "/api/applications/student/{studentId}",
    tag = APPLICATION_TAG,
    params(("studentId" = i32, Path, description = "Student account id")),
    responses(
        (status = 200, description = "The student's applications, newest first", body = Vec<ApplicationDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_student_applications(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db)
        .list_by_student(student_id)
        .await?;

    Ok(Json(applications))
}

/// List the applications received by a company's offers
#[utoipa::path(
    get,
    path = "/api/applications/company/{companyId}",
    tag = APPLICATION_TAG,
    params(("companyId" = i32, Path, description = "Company account id")),
    responses(
        (status = 200, description = "Applications to the company's offers, newest first", body = Vec<ApplicationDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_company_applications(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let applications = ApplicationService::new(&state.db)
        .list_by_company(company_id)
        .await?;

    Ok(Json(applications))
}

/// Change an application's state
///
/// Accepts the wire states PENDENTE, ACEITE and RECUSADO.
#[utoipa::path(
    patch,
    path = "/api/applications/{id}/state",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application id")),
    request_body = ApplicationStateDto,
    responses(
        (status = 200, description = "Application state updated", body = ApplicationDto),
        (status = 400, description = "Missing or unrecognized state", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is neither a company nor a coordinator", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_application_state(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ApplicationStateDto>,
) -> Result<impl IntoResponse, Error> {
    let application = ApplicationService::new(&state.db)
        .set_state(id, payload)
        .await?;

    Ok(Json(application))
}

/// Delete an application
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ApplicationService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Application deleted successfully")))
}
