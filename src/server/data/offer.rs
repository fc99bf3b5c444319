use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Column values for a new offer row.
#[derive(Debug, Clone, Default)]
pub struct NewOffer {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company_id: i32,
}

/// Full overwrite of an offer's mutable columns, used by PUT handlers.
#[derive(Debug, Clone)]
pub struct OfferReplacement {
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company_id: i32,
}

/// Partial update of an offer; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct OfferChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub company_id: Option<i32>,
}

pub struct OfferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferRepository<'a> {
    /// Creates a new instance of [`OfferRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new offer row
    pub async fn create(&self, offer: NewOffer) -> Result<entity::offer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let offer = entity::offer::ActiveModel {
            title: ActiveValue::Set(offer.title),
            description: ActiveValue::Set(offer.description),
            duration: ActiveValue::Set(offer.duration),
            location: ActiveValue::Set(offer.location),
            company_id: ActiveValue::Set(offer.company_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        offer.insert(self.db).await
    }

    /// Gets an offer by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(id).one(self.db).await
    }

    /// Lists every offer, newest first
    pub async fn list(&self) -> Result<Vec<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .order_by_desc(entity::offer::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists every offer published by a company, newest first
    pub async fn list_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::offer::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets every offer whose id is in `ids`, in no particular order
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::offer::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Offer::find()
            .filter(entity::offer::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Overwrites every mutable column of an offer
    pub async fn replace(
        &self,
        offer: entity::offer::Model,
        replacement: OfferReplacement,
    ) -> Result<entity::offer::Model, DbErr> {
        let mut offer = offer.into_active_model();

        offer.title = ActiveValue::Set(replacement.title);
        offer.description = ActiveValue::Set(replacement.description);
        offer.duration = ActiveValue::Set(replacement.duration);
        offer.location = ActiveValue::Set(replacement.location);
        offer.company_id = ActiveValue::Set(replacement.company_id);
        offer.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        offer.update(self.db).await
    }

    /// Applies the provided columns of `changes` to an offer
    pub async fn patch(
        &self,
        offer: entity::offer::Model,
        changes: OfferChanges,
    ) -> Result<entity::offer::Model, DbErr> {
        let mut offer = offer.into_active_model();

        if let Some(title) = changes.title {
            offer.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            offer.description = ActiveValue::Set(Some(description));
        }
        if let Some(duration) = changes.duration {
            offer.duration = ActiveValue::Set(Some(duration));
        }
        if let Some(location) = changes.location {
            offer.location = ActiveValue::Set(Some(location));
        }
        if let Some(company_id) = changes.company_id {
            offer.company_id = ActiveValue::Set(company_id);
        }
        offer.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        offer.update(self.db).await
    }

    /// Deletes an offer
    ///
    /// Returns OK regardless of the offer existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Offer::delete_by_id(id).exec(self.db).await
    }
}
