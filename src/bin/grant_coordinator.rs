//! Creates or promotes a coordinator account.
//!
//! Usage: grant_coordinator <email> [name]
//!
//! An existing directory account is recreated under the Coordinator role
//! and keeps its provider link. An unknown email gets a fresh provider
//! account with a printed one-time password.

use rand::distr::Alphanumeric;
use rand::Rng;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use practika::model::account::Role;
use practika::server::data::account::{AccountRepository, NewAccount};
use practika::server::error::Error;
use practika::server::identity::IdentityClient;
use practika::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let email = match std::env::args().nth(1) {
        Some(email) => email,
        None => {
            eprintln!("Usage: grant_coordinator <email> [name]");
            std::process::exit(1);
        }
    };
    let name = std::env::args().nth(2).unwrap_or_else(|| "Coordinator".to_string());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let identity = startup::build_identity_client(&config).unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    if let Err(e) = grant(&db, &identity, &email, &name).await {
        tracing::error!("Granting coordinator access failed: {}", e);
        std::process::exit(1);
    }
}

async fn grant(
    db: &DatabaseConnection,
    identity: &IdentityClient,
    email: &str,
    name: &str,
) -> Result<(), Error> {
    let accounts = AccountRepository::new(db);

    match accounts.find_by_email(email).await? {
        Some(existing) if existing.role == Role::Coordinator.to_string() => {
            tracing::info!("{} is already a coordinator", email);
        }
        Some(existing) => {
            accounts.delete_by_id(existing.id).await?;

            let promoted = accounts
                .create(
                    Role::Coordinator,
                    NewAccount {
                        name: existing.name.clone(),
                        email: existing.email.clone(),
                        external_id: existing.external_id.clone(),
                        ..Default::default()
                    },
                )
                .await?;

            // Without a refreshed claim the next token would still carry
            // the old role.
            if let Some(uid) = &existing.external_id {
                identity.set_role_claim(uid, Role::Coordinator).await?;
            }

            tracing::info!(
                account = promoted.id,
                "Promoted {} ({}) to coordinator",
                existing.name,
                email,
            );
        }
        None => {
            let password: String = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect();

            let provider = identity.create_user(email, &password, name).await?;
            identity.set_role_claim(&provider.uid, Role::Coordinator).await?;

            let created = accounts
                .create(
                    Role::Coordinator,
                    NewAccount {
                        name: name.to_string(),
                        email: email.to_string(),
                        external_id: Some(provider.uid.clone()),
                        ..Default::default()
                    },
                )
                .await?;

            tracing::info!(account = created.id, "Created coordinator {}", email);

            println!("Coordinator account ready.");
            println!("  Email: {}", email);
            println!("  One-time password: {}", password);
            println!("Change the password after the first login.");
        }
    }

    Ok(())
}
