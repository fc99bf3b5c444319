pub use sea_orm_migration::prelude::*;

mod m20250901_000001_account;
mod m20250901_000002_offer;
mod m20250901_000003_application;
mod m20250901_000004_placement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_account::Migration),
            Box::new(m20250901_000002_offer::Migration),
            Box::new(m20250901_000003_application::Migration),
            Box::new(m20250901_000004_placement::Migration),
        ]
    }
}
