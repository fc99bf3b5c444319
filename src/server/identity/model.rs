use serde::Deserialize;

use crate::model::account::Role;

/// Claims carried by a provider-issued id token. Audience, issuer, and
/// expiry are checked during decoding and not kept here.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub name: Option<String>,
    /// Custom claim set at registration.
    #[serde(default)]
    pub role: Option<String>,
}

/// A caller identity extracted from a successfully verified id token.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub external_id: String,
    pub email: String,
    pub email_verified: bool,
    pub display_name: Option<String>,
    /// Role claim embedded in the token, when present and well formed.
    pub role: Option<Role>,
}

/// Provider account as returned by the admin create endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderAccount {
    pub uid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub error: Option<String>,
}
