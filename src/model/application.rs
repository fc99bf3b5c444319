use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::StudentSummaryDto;
use crate::model::offer::OfferDetailDto;

/// Lifecycle of an application. The wire and database values keep the
/// platform's historical Portuguese names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApplicationState {
    #[default]
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "ACEITE")]
    Accepted,
    #[serde(rename = "RECUSADO")]
    Rejected,
}

impl ApplicationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationState::Pending => "PENDENTE",
            ApplicationState::Accepted => "ACEITE",
            ApplicationState::Rejected => "RECUSADO",
        }
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(ApplicationState::Pending),
            "ACEITE" => Ok(ApplicationState::Accepted),
            "RECUSADO" => Ok(ApplicationState::Rejected),
            other => Err(format!(
                "Invalid application state {:?}, expected one of PENDENTE, ACEITE, RECUSADO",
                other
            )),
        }
    }
}

/// An application with raw references, as returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i32,
    pub state: ApplicationState,
    pub student: i32,
    pub offer: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An application with its student and offer embedded. Either embed is
/// null when the referenced record no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetailDto {
    pub id: i32,
    pub state: ApplicationState,
    pub student: Option<StudentSummaryDto>,
    pub offer: Option<OfferDetailDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for submitting an application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayloadDto {
    pub student: Option<i32>,
    pub offer: Option<i32>,
    /// Initial state; defaults to PENDENTE. Parsed as a string so an
    /// unknown value reports a validation error instead of a
    /// deserialization rejection.
    pub state: Option<String>,
}

/// Request body for the state transition endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationStateDto {
    pub state: Option<String>,
}
