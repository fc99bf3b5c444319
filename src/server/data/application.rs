use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::application::ApplicationState;

/// Column values for a new application row.
///
/// Student and offer ids are stored as plain integers; nothing enforces
/// that the referenced rows exist.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub state: ApplicationState,
    pub student_id: i32,
    pub offer_id: i32,
}

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new application row
    pub async fn create(
        &self,
        application: NewApplication,
    ) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let application = entity::application::ActiveModel {
            state: ActiveValue::Set(application.state.to_string()),
            student_id: ActiveValue::Set(application.student_id),
            offer_id: ActiveValue::Set(application.offer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Gets an application by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists every application, newest first
    pub async fn list(&self) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .order_by_desc(entity::application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists every application submitted by a student, newest first
    pub async fn list_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::StudentId.eq(student_id))
            .order_by_desc(entity::application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists every application targeting one of the given offers,
    /// newest first
    pub async fn list_by_offer_ids(
        &self,
        offer_ids: &[i32],
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        if offer_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Application::find()
            .filter(entity::application::Column::OfferId.is_in(offer_ids.iter().copied()))
            .order_by_desc(entity::application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Overwrites the state column of an application
    pub async fn set_state(
        &self,
        application: entity::application::Model,
        state: ApplicationState,
    ) -> Result<entity::application::Model, DbErr> {
        let mut application = application.into_active_model();

        application.state = ActiveValue::Set(state.to_string());
        application.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        application.update(self.db).await
    }

    /// Deletes an application
    ///
    /// Returns OK regardless of the application existing, to confirm
    /// the deletion result check the [`DeleteResult::rows_affected`]
    /// field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Deletes every application targeting an offer
    ///
    /// Used when an offer is removed; the applications pointing at it
    /// go with it.
    pub async fn delete_by_offer(&self, offer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Application::delete_many()
            .filter(entity::application::Column::OfferId.eq(offer_id))
            .exec(self.db)
            .await
    }
}
