use crate::model::account::Role;
use crate::server::identity::model::VerifiedIdentity;

/// The authenticated caller, attached to the request by the identity
/// middleware.
///
/// `role` is the resolved role: the token's claim when present,
/// otherwise whatever the directory lookup by email produced. It stays
/// `None` for callers with no directory record, which public routes
/// tolerate and role guards reject.
#[derive(Debug, Clone)]
pub struct CurrentIdentity {
    pub external_id: String,
    pub email: String,
    pub email_verified: bool,
    pub display_name: Option<String>,
    pub role: Option<Role>,
}

impl CurrentIdentity {
    pub fn from_verified(identity: VerifiedIdentity, role: Option<Role>) -> Self {
        Self {
            external_id: identity.external_id,
            email: identity.email,
            email_verified: identity.email_verified,
            display_name: identity.display_name,
            role,
        }
    }
}
