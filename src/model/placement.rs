use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::{ProfessorSummaryDto, StudentSummaryDto};

/// Lifecycle of a placement. Wire and database values keep the
/// platform's historical Portuguese names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PlacementState {
    #[default]
    #[serde(rename = "ATIVO")]
    Active,
    #[serde(rename = "CONCLUIDO")]
    Completed,
}

impl PlacementState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementState::Active => "ATIVO",
            PlacementState::Completed => "CONCLUIDO",
        }
    }
}

impl fmt::Display for PlacementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlacementState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATIVO" => Ok(PlacementState::Active),
            "CONCLUIDO" => Ok(PlacementState::Completed),
            other => Err(format!(
                "Invalid placement state {:?}, expected one of ATIVO, CONCLUIDO",
                other
            )),
        }
    }
}

/// A placement with raw references, as returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDto {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub state: PlacementState,
    pub student: i32,
    pub professor: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A placement with its student and supervising professor embedded;
/// either embed is null when the referenced account no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDetailDto {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub state: PlacementState,
    pub student: Option<StudentSummaryDto>,
    pub professor: Option<ProfessorSummaryDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or fully replacing a placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementPayloadDto {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Defaults to ATIVO when absent.
    pub state: Option<String>,
    pub student: Option<i32>,
    pub professor: Option<i32>,
}
