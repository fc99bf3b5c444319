use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::model::account::{CompanySummaryDto, Role};
use crate::model::offer::{OfferDetailDto, OfferDto, OfferPatchDto, OfferPayloadDto};
use crate::server::data::account::AccountRepository;
use crate::server::data::application::ApplicationRepository;
use crate::server::data::offer::{NewOffer, OfferChanges, OfferRepository, OfferReplacement};
use crate::server::error::{domain::DomainError, Error};
use crate::server::service::account::{company_summary, is_blank};

/// Service for internship offers.
///
/// Owns the publication rules (an offer belongs to an existing,
/// validated company), the company embed on reads, and the cascade that
/// removes an offer's applications together with the offer.
pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    /// Creates a new instance of [`OfferService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new offer.
    ///
    /// The company reference must name an existing company account and
    /// that company must have been validated by a coordinator.
    pub async fn create(&self, payload: OfferPayloadDto) -> Result<OfferDto, Error> {
        let (title, company_id) = required_offer_fields(&payload)?;

        let company = self.checked_company(company_id).await?;
        if company.validated != Some(true) {
            return Err(DomainError::CompanyNotValidated.into());
        }

        let offer = OfferRepository::new(self.db)
            .create(NewOffer {
                title,
                description: payload.description,
                duration: payload.duration,
                location: payload.location,
                company_id,
            })
            .await?;

        Ok(offer_dto(offer))
    }

    /// Lists every offer with its company embedded
    pub async fn list(&self) -> Result<Vec<OfferDetailDto>, Error> {
        let offers = OfferRepository::new(self.db).list().await?;
        let companies = self.companies_for(&offers).await?;

        Ok(offers
            .into_iter()
            .map(|offer| {
                let company = companies.get(&offer.company_id).cloned();
                offer_detail(offer, company)
            })
            .collect())
    }

    /// Gets an offer by id with its company embedded
    pub async fn get(&self, id: i32) -> Result<OfferDetailDto, Error> {
        let offer = OfferRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Offer"))?;

        let companies = self.companies_for(std::slice::from_ref(&offer)).await?;
        let company = companies.get(&offer.company_id).cloned();

        Ok(offer_detail(offer, company))
    }

    /// Lists a company's offers without embeds
    pub async fn list_by_company(&self, company_id: i32) -> Result<Vec<OfferDto>, Error> {
        Ok(OfferRepository::new(self.db)
            .list_by_company(company_id)
            .await?
            .into_iter()
            .map(offer_dto)
            .collect())
    }

    /// Fully replaces an offer.
    ///
    /// The company reference must still name an existing company; the
    /// validated flag is only checked at publication time.
    pub async fn replace(&self, id: i32, payload: OfferPayloadDto) -> Result<OfferDto, Error> {
        let (title, company_id) = required_offer_fields(&payload)?;

        let repository = OfferRepository::new(self.db);
        let existing = repository
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Offer"))?;

        self.checked_company(company_id).await?;

        let offer = repository
            .replace(
                existing,
                OfferReplacement {
                    title,
                    description: payload.description,
                    duration: payload.duration,
                    location: payload.location,
                    company_id,
                },
            )
            .await?;

        Ok(offer_dto(offer))
    }

    /// Applies the provided fields of `payload` to an offer
    pub async fn patch(&self, id: i32, payload: OfferPatchDto) -> Result<OfferDto, Error> {
        let repository = OfferRepository::new(self.db);
        let existing = repository
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Offer"))?;

        if let Some(company_id) = payload.company {
            self.checked_company(company_id).await?;
        }

        let offer = repository
            .patch(
                existing,
                OfferChanges {
                    title: payload.title,
                    description: payload.description,
                    duration: payload.duration,
                    location: payload.location,
                    company_id: payload.company,
                },
            )
            .await?;

        Ok(offer_dto(offer))
    }

    /// Deletes an offer and every application referencing it.
    ///
    /// Two sequential deletes, offer first; a crash in between leaves
    /// orphaned applications behind. Returns how many applications went
    /// with the offer.
    pub async fn delete_with_applications(&self, id: i32) -> Result<u64, Error> {
        let result = OfferRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Offer").into());
        }

        let cascade = ApplicationRepository::new(self.db)
            .delete_by_offer(id)
            .await?;

        tracing::info!(
            offer = id,
            applications = cascade.rows_affected,
            "deleted offer and its applications"
        );

        Ok(cascade.rows_affected)
    }

    async fn checked_company(&self, company_id: i32) -> Result<entity::account::Model, Error> {
        AccountRepository::new(self.db)
            .get_by_id_and_role(company_id, Role::Company)
            .await?
            .ok_or_else(|| {
                DomainError::Validation(format!("Company {} does not exist", company_id)).into()
            })
    }

    async fn companies_for(
        &self,
        offers: &[entity::offer::Model],
    ) -> Result<HashMap<i32, CompanySummaryDto>, Error> {
        let mut company_ids: Vec<i32> = offers.iter().map(|offer| offer.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let accounts = AccountRepository::new(self.db)
            .get_many_by_ids(&company_ids)
            .await?;

        Ok(accounts
            .iter()
            .filter(|account| account.role == Role::Company.as_str())
            .map(|account| (account.id, company_summary(account)))
            .collect())
    }
}

fn required_offer_fields(payload: &OfferPayloadDto) -> Result<(String, i32), DomainError> {
    let mut missing = Vec::new();

    if is_blank(&payload.title) {
        missing.push("title");
    }
    if payload.company.is_none() {
        missing.push("company");
    }

    if !missing.is_empty() {
        return Err(DomainError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok((
        payload.title.clone().unwrap_or_default(),
        payload.company.unwrap_or_default(),
    ))
}

pub(crate) fn offer_dto(offer: entity::offer::Model) -> OfferDto {
    OfferDto {
        id: offer.id,
        title: offer.title,
        description: offer.description,
        duration: offer.duration,
        location: offer.location,
        company: offer.company_id,
        created_at: offer.created_at,
        updated_at: offer.updated_at,
    }
}

pub(crate) fn offer_detail(
    offer: entity::offer::Model,
    company: Option<CompanySummaryDto>,
) -> OfferDetailDto {
    OfferDetailDto {
        id: offer.id,
        title: offer.title,
        description: offer.description,
        duration: offer.duration,
        location: offer.location,
        company,
        created_at: offer.created_at,
        updated_at: offer.updated_at,
    }
}
