use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::CompanySummaryDto;

/// An offer with its company as a raw reference, as returned by mutating
/// endpoints and the per-company listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An offer with its publishing company embedded; null when the company
/// account has been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetailDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company: Option<CompanySummaryDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for publishing or fully replacing an offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferPayloadDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    /// Account id of the publishing company.
    pub company: Option<i32>,
}

/// Request body for partially updating an offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferPatchDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company: Option<i32>,
}
