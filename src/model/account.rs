use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four kinds of account the platform knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Student,
    Professor,
    Company,
    Coordinator,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Student,
        Role::Professor,
        Role::Company,
        Role::Coordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::Company => "Company",
            Role::Coordinator => "Coordinator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Role::Student),
            "Professor" => Ok(Role::Professor),
            "Company" => Ok(Role::Company),
            "Coordinator" => Ok(Role::Coordinator),
            other => Err(format!(
                "Invalid role {:?}, expected one of Student, Professor, Company, Coordinator",
                other
            )),
        }
    }
}

/// Fields shared by every account regardless of role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountBase {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Subject id assigned by the identity provider; absent for accounts
    /// created directly through the directory endpoints.
    pub external_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentAccount {
    #[serde(flatten)]
    pub base: AccountBase,
    pub field_of_study: String,
    pub skills: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorAccount {
    #[serde(flatten)]
    pub base: AccountBase,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAccount {
    #[serde(flatten)]
    pub base: AccountBase,
    pub tax_id: String,
    /// Set by a coordinator; companies cannot publish offers until then.
    pub validated: bool,
}

/// An account tagged by its role.
///
/// Serializes with the role as a `role` field alongside the flattened
/// account fields, so a student comes out as
/// `{"role": "Student", "id": 1, "name": ..., "fieldOfStudy": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role")]
pub enum Account {
    Student(StudentAccount),
    Professor(ProfessorAccount),
    Company(CompanyAccount),
    Coordinator(AccountBase),
}

impl Account {
    pub fn role(&self) -> Role {
        match self {
            Account::Student(_) => Role::Student,
            Account::Professor(_) => Role::Professor,
            Account::Company(_) => Role::Company,
            Account::Coordinator(_) => Role::Coordinator,
        }
    }

    pub fn base(&self) -> &AccountBase {
        match self {
            Account::Student(account) => &account.base,
            Account::Professor(account) => &account.base,
            Account::Company(account) => &account.base,
            Account::Coordinator(base) => base,
        }
    }
}

/// Request body for creating or fully replacing a student.
///
/// Required fields are still `Option` so that an incomplete body produces
/// a validation error listing what is missing rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayloadDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
}

/// Request body for partially updating a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatchDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
}

/// Request body for creating or fully replacing a professor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorPayloadDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Request body for partially updating a professor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorPatchDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Request body for creating or fully replacing a company.
///
/// The `validated` flag is deliberately absent: it only changes through
/// the coordinator-gated validation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayloadDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub tax_id: Option<String>,
}

/// Request body for partially updating a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatchDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub tax_id: Option<String>,
}

/// Shallow student projection embedded in application and placement
/// listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
}

/// Shallow professor projection embedded in placement listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

/// Shallow company projection embedded in offer listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub tax_id: Option<String>,
}
