//! Offer, application and placement row fixtures.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Insert an offer published by the given company id.
pub async fn insert_offer(
    db: &DatabaseConnection,
    title: &str,
    company_id: i32,
) -> Result<entity::offer::Model, DbErr> {
    entity::prelude::Offer::insert(entity::offer::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(Some("Fixture offer".to_string())),
        duration: ActiveValue::Set(Some("6 meses".to_string())),
        location: ActiveValue::Set(Some("Lisboa".to_string())),
        company_id: ActiveValue::Set(company_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert an application in the given wire state.
pub async fn insert_application(
    db: &DatabaseConnection,
    state: &str,
    student_id: i32,
    offer_id: i32,
) -> Result<entity::application::Model, DbErr> {
    entity::prelude::Application::insert(entity::application::ActiveModel {
        state: ActiveValue::Set(state.to_string()),
        student_id: ActiveValue::Set(student_id),
        offer_id: ActiveValue::Set(offer_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}

/// Insert an active placement pairing a student with a professor.
pub async fn insert_placement(
    db: &DatabaseConnection,
    student_id: i32,
    professor_id: i32,
) -> Result<entity::placement::Model, DbErr> {
    entity::prelude::Placement::insert(entity::placement::ActiveModel {
        start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()),
        end_date: ActiveValue::Set(None),
        state: ActiveValue::Set("ATIVO".to_string()),
        student_id: ActiveValue::Set(student_id),
        professor_id: ActiveValue::Set(professor_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec_with_returning(db)
    .await
}
