//! Resets the database and loads a small demo data set.
//!
//! Wipes every table, then inserts a handful of accounts, two published
//! offers, applications in each state and two placements. Intended for
//! local development only.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing_subscriber::EnvFilter;

use practika::model::account::Role;
use practika::model::application::ApplicationState;
use practika::model::placement::PlacementState;
use practika::server::data::account::{AccountRepository, NewAccount};
use practika::server::data::application::{ApplicationRepository, NewApplication};
use practika::server::data::offer::{NewOffer, OfferRepository};
use practika::server::data::placement::{NewPlacement, PlacementRepository};
use practika::server::error::Error;
use practika::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    if let Err(e) = seed(&db).await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Seed completed");
}

async fn seed(db: &DatabaseConnection) -> Result<(), Error> {
    entity::prelude::Placement::delete_many().exec(db).await?;
    entity::prelude::Application::delete_many().exec(db).await?;
    entity::prelude::Offer::delete_many().exec(db).await?;
    entity::prelude::Account::delete_many().exec(db).await?;

    let accounts = AccountRepository::new(db);

    let student1 = accounts
        .create(
            Role::Student,
            NewAccount {
                name: "João Silva".to_string(),
                email: "joao@email.com".to_string(),
                field_of_study: Some("Engenharia Informática".to_string()),
                skills: Some("JavaScript, Node.js, React".to_string()),
                resume: Some("link_para_cv.pdf".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let student2 = accounts
        .create(
            Role::Student,
            NewAccount {
                name: "Ana Costa".to_string(),
                email: "ana@email.com".to_string(),
                field_of_study: Some("Engenharia Informática".to_string()),
                skills: Some("Python, Django, MongoDB".to_string()),
                resume: Some("link_para_cv2.pdf".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let professor1 = accounts
        .create(
            Role::Professor,
            NewAccount {
                name: "Dra. Maria Santos".to_string(),
                email: "maria@email.com".to_string(),
                department: Some("Engenharia".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let professor2 = accounts
        .create(
            Role::Professor,
            NewAccount {
                name: "Dr. Pedro Oliveira".to_string(),
                email: "pedro@email.com".to_string(),
                department: Some("Engenharia Informática".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let company1 = accounts
        .create(
            Role::Company,
            NewAccount {
                name: "Tech Solutions".to_string(),
                email: "contact@techsolutions.com".to_string(),
                tax_id: Some("123456789".to_string()),
                validated: Some(true),
                ..Default::default()
            },
        )
        .await?;

    let company2 = accounts
        .create(
            Role::Company,
            NewAccount {
                name: "Innovatech".to_string(),
                email: "contact@innovatech.com".to_string(),
                tax_id: Some("987654321".to_string()),
                validated: Some(true),
                ..Default::default()
            },
        )
        .await?;

    // Left unvalidated so the coordinator validation flow has something
    // to act on.
    accounts
        .create(
            Role::Company,
            NewAccount {
                name: "Futura Labs".to_string(),
                email: "contact@futuralabs.com".to_string(),
                tax_id: Some("555444333".to_string()),
                validated: Some(false),
                ..Default::default()
            },
        )
        .await?;

    accounts
        .create(
            Role::Coordinator,
            NewAccount {
                name: "Carlos Ferreira".to_string(),
                email: "carlos@email.com".to_string(),
                ..Default::default()
            },
        )
        .await?;

    let offers = OfferRepository::new(db);

    let offer1 = offers
        .create(NewOffer {
            title: "Desenvolvedor Frontend".to_string(),
            description: Some("React + Tailwind".to_string()),
            duration: Some("3 meses".to_string()),
            location: Some("Lisboa".to_string()),
            company_id: company1.id,
        })
        .await?;

    let offer2 = offers
        .create(NewOffer {
            title: "Backend Node.js".to_string(),
            description: Some("Node.js + MongoDB".to_string()),
            duration: Some("6 meses".to_string()),
            location: Some("Porto".to_string()),
            company_id: company2.id,
        })
        .await?;

    let applications = ApplicationRepository::new(db);

    applications
        .create(NewApplication {
            state: ApplicationState::Pending,
            student_id: student1.id,
            offer_id: offer1.id,
        })
        .await?;

    applications
        .create(NewApplication {
            state: ApplicationState::Accepted,
            student_id: student2.id,
            offer_id: offer2.id,
        })
        .await?;

    applications
        .create(NewApplication {
            state: ApplicationState::Rejected,
            student_id: student1.id,
            offer_id: offer2.id,
        })
        .await?;

    let placements = PlacementRepository::new(db);

    placements
        .create(NewPlacement {
            start_date: date(2025, 9, 1),
            end_date: Some(date(2025, 12, 1)),
            state: PlacementState::Active,
            student_id: student1.id,
            professor_id: professor1.id,
        })
        .await?;

    placements
        .create(NewPlacement {
            start_date: date(2025, 6, 1),
            end_date: Some(date(2025, 12, 1)),
            state: PlacementState::Completed,
            student_id: student2.id,
            professor_id: professor2.id,
        })
        .await?;

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
