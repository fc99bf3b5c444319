use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::placement::PlacementState;

/// Column values for a new placement row.
#[derive(Debug, Clone)]
pub struct NewPlacement {
    pub start_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub state: PlacementState,
    pub student_id: i32,
    pub professor_id: i32,
}

/// Full overwrite of a placement's mutable columns, used by PUT
/// handlers.
pub type PlacementReplacement = NewPlacement;

pub struct PlacementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlacementRepository<'a> {
    /// Creates a new instance of [`PlacementRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new placement row
    pub async fn create(
        &self,
        placement: NewPlacement,
    ) -> Result<entity::placement::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let placement = entity::placement::ActiveModel {
            start_date: ActiveValue::Set(placement.start_date),
            end_date: ActiveValue::Set(placement.end_date),
            state: ActiveValue::Set(placement.state.to_string()),
            student_id: ActiveValue::Set(placement.student_id),
            professor_id: ActiveValue::Set(placement.professor_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        placement.insert(self.db).await
    }

    /// Gets a placement by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::placement::Model>, DbErr> {
        entity::prelude::Placement::find_by_id(id).one(self.db).await
    }

    /// Lists every placement, newest first
    pub async fn list(&self) -> Result<Vec<entity::placement::Model>, DbErr> {
        entity::prelude::Placement::find()
            .order_by_desc(entity::placement::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Overwrites every mutable column of a placement
    pub async fn replace(
        &self,
        placement: entity::placement::Model,
        replacement: PlacementReplacement,
    ) -> Result<entity::placement::Model, DbErr> {
        let mut placement = placement.into_active_model();

        placement.start_date = ActiveValue::Set(replacement.start_date);
        placement.end_date = ActiveValue::Set(replacement.end_date);
        placement.state = ActiveValue::Set(replacement.state.to_string());
        placement.student_id = ActiveValue::Set(replacement.student_id);
        placement.professor_id = ActiveValue::Set(replacement.professor_id);
        placement.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        placement.update(self.db).await
    }

    /// Deletes a placement
    ///
    /// Returns OK regardless of the placement existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Placement::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
