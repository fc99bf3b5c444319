use sea_orm::DatabaseConnection;

use crate::server::identity::IdentityClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: IdentityClient,
}
