use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::account::Role;

/// Request body for registration. Role-specific fields beyond the
/// requireds are optional and default empty in the directory record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Parsed as a string so an unknown role reports a validation error
    /// naming the accepted values.
    pub role: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub tax_id: Option<String>,
}

/// The newly registered account as echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserDto {
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Directory id of the created account.
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponseDto {
    pub message: String,
    pub user: RegisteredUserDto,
}

/// Request body for resolving a directory record by email after the
/// client has authenticated with the identity provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: LoginUserDto,
}

/// The caller's directory record joined with their token identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedUserDto {
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponseDto {
    pub user: VerifiedUserDto,
}

/// The account removed by the delete-user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUserDto {
    pub external_id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponseDto {
    pub message: String,
    pub deleted_user: DeletedUserDto,
}
