//! Directory row fixtures, one insert helper per account role.
//!
//! Optional profile columns get light defaults so role-scoped reads and
//! embeds have something to show; tests that care about a specific value
//! should insert through the code under test instead.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Insert a student account.
pub async fn insert_student(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entity::account::Model, DbErr> {
    entity::prelude::Account::insert(entity::account::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        role: ActiveValue::Set("Student".to_string()),
        field_of_study: ActiveValue::Set(Some("Engenharia Informática".to_string())),
        skills: ActiveValue::Set(Some("Rust, SQL".to_string())),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert a student account linked to a provider subject id.
pub async fn insert_student_with_external_id(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    external_id: &str,
) -> Result<entity::account::Model, DbErr> {
    entity::prelude::Account::insert(entity::account::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        external_id: ActiveValue::Set(Some(external_id.to_string())),
        role: ActiveValue::Set("Student".to_string()),
        field_of_study: ActiveValue::Set(Some("Engenharia Informática".to_string())),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert a professor account.
pub async fn insert_professor(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entity::account::Model, DbErr> {
    entity::prelude::Account::insert(entity::account::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        role: ActiveValue::Set("Professor".to_string()),
        department: ActiveValue::Set(Some("Engenharia".to_string())),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert a company account, validated or not.
///
/// The tax id is derived from the email so multiple companies can
/// coexist under the column's uniqueness constraint.
pub async fn insert_company(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    validated: bool,
) -> Result<entity::account::Model, DbErr> {
    entity::prelude::Account::insert(entity::account::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        role: ActiveValue::Set("Company".to_string()),
        tax_id: ActiveValue::Set(Some(format!("nif-{}", email))),
        validated: ActiveValue::Set(Some(validated)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert a coordinator account.
pub async fn insert_coordinator(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entity::account::Model, DbErr> {
    entity::prelude::Account::insert(entity::account::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        role: ActiveValue::Set("Coordinator".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}
