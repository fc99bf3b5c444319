use crate::server::{config::Config, error::Error, identity::IdentityClient};

/// Build the identity provider client from the configured endpoint and
/// token validation parameters.
pub fn build_identity_client(config: &Config) -> Result<IdentityClient, Error> {
    let identity = IdentityClient::new(
        &config.idp_url,
        &config.idp_issuer,
        &config.idp_audience,
        &config.idp_api_key,
    )?;

    Ok(identity)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
