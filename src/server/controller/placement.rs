use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::api::{ErrorDto, MessageDto};
use crate::model::placement::{PlacementDetailDto, PlacementDto, PlacementPayloadDto};
use crate::server::{error::Error, model::app::AppState, service::placement::PlacementService};

pub static PLACEMENT_TAG: &str = "placements";

/// List all placements with student and professor embedded
#[utoipa::path(
    get,
    path = "/api/placements",
    tag = PLACEMENT_TAG,
    responses(
        (status = 200, description = "All placements, newest first", body = Vec<PlacementDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_placements(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let placements = PlacementService::new(&state.db).list().await?;

    Ok(Json(placements))
}

/// Record a new placement
///
/// Restricted to professors and coordinators.
#[utoipa::path(
    post,
    path = "/api/placements",
    tag = PLACEMENT_TAG,
    request_body = PlacementPayloadDto,
    responses(
        (status = 201, description = "Placement recorded", body = PlacementDto),
        (status = 400, description = "Missing required fields or invalid state", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is neither a professor nor a coordinator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_placement(
    State(state): State<AppState>,
    Json(payload): Json<PlacementPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let placement = PlacementService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(placement)))
}

/// Get a placement by id with student and professor embedded
#[utoipa::path(
    get,
    path = "/api/placements/{id}",
    tag = PLACEMENT_TAG,
    params(("id" = i32, Path, description = "Placement id")),
    responses(
        (status = 200, description = "The placement", body = PlacementDetailDto),
        (status = 404, description = "Placement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_placement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let placement = PlacementService::new(&state.db).get(id).await?;

    Ok(Json(placement))
}

/// Fully replace a placement's fields
#[utoipa::path(
    put,
    path = "/api/placements/{id}",
    tag = PLACEMENT_TAG,
    params(("id" = i32, Path, description = "Placement id")),
    request_body = PlacementPayloadDto,
    responses(
        (status = 200, description = "Placement replaced", body = PlacementDto),
        (status = 400, description = "Missing required fields or invalid state", body = ErrorDto),
        (status = 404, description = "Placement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_placement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PlacementPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let placement = PlacementService::new(&state.db).replace(id, payload).await?;

    Ok(Json(placement))
}

/// Delete a placement
#[utoipa::path(
    delete,
    path = "/api/placements/{id}",
    tag = PLACEMENT_TAG,
    params(("id" = i32, Path, description = "Placement id")),
    responses(
        (status = 200, description = "Placement deleted", body = MessageDto),
        (status = 404, description = "Placement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_placement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlacementService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Placement deleted successfully")))
}
