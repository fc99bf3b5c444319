use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::model::api::{ErrorDto, MessageDto};
use crate::model::offer::{OfferDetailDto, OfferDto, OfferPatchDto, OfferPayloadDto};
use crate::server::{error::Error, model::app::AppState, service::offer::OfferService};

pub static OFFER_TAG: &str = "offers";

/// List all offers with their publishing company embedded
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "All offers, newest first", body = Vec<OfferDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_offers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let offers = OfferService::new(&state.db).list().await?;

    Ok(Json(offers))
}

/// Publish a new offer
///
/// Only validated companies can publish; an unvalidated company id is
/// rejected with 403.
#[utoipa::path(
    post,
    path = "/api/offers",
    tag = OFFER_TAG,
    request_body = OfferPayloadDto,
    responses(
        (status = 201, description = "Offer published", body = OfferDto),
        (status = 400, description = "Missing required fields or unknown company", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a company, or the company is not validated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<OfferPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let offer = OfferService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// Get an offer by id with its company embedded
#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "The offer", body = OfferDetailDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let offer = OfferService::new(&state.db).get(id).await?;

    Ok(Json(offer))
}

/// List the offers published by a company
#[utoipa::path(
    get,
    path = "/api/companies/{id}/offers",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Company account id")),
    responses(
        (status = 200, description = "The company's offers, newest first", body = Vec<OfferDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_company_offers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let offers = OfferService::new(&state.db).list_by_company(id).await?;

    Ok(Json(offers))
}

/// Fully replace an offer's fields
#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer id")),
    request_body = OfferPayloadDto,
    responses(
        (status = 200, description = "Offer replaced", body = OfferDto),
        (status = 400, description = "Missing required fields or unknown company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OfferPayloadDto>,
) -> Result<impl IntoResponse, Error> {
    let offer = OfferService::new(&state.db).replace(id, payload).await?;

    Ok(Json(offer))
}

/// Partially update an offer
#[utoipa::path(
    patch,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer id")),
    request_body = OfferPatchDto,
    responses(
        (status = 200, description = "Offer updated", body = OfferDto),
        (status = 400, description = "Unknown company", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OfferPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let offer = OfferService::new(&state.db).patch(id, payload).await?;

    Ok(Json(offer))
}

/// Delete an offer together with its applications
#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer and its applications deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    OfferService::new(&state.db).delete_with_applications(id).await?;

    Ok(Json(MessageDto::new("Offer deleted successfully")))
}
