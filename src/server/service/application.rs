use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::model::account::{Role, StudentSummaryDto};
use crate::model::application::{
    ApplicationDetailDto, ApplicationDto, ApplicationPayloadDto, ApplicationState,
    ApplicationStateDto,
};
use crate::model::offer::OfferDetailDto;
use crate::server::data::account::AccountRepository;
use crate::server::data::application::{ApplicationRepository, NewApplication};
use crate::server::data::offer::OfferRepository;
use crate::server::error::{domain::DomainError, Error};
use crate::server::service::account::student_summary;
use crate::server::service::offer::offer_detail;

/// Service for internship applications.
///
/// Applications keep their student and offer references as opaque ids;
/// nothing checks that they exist at submission time, and listings embed
/// whatever still resolves, null otherwise.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new application, PENDENTE unless a state is given
    pub async fn create(&self, payload: ApplicationPayloadDto) -> Result<ApplicationDto, Error> {
        let mut missing = Vec::new();
        if payload.student.is_none() {
            missing.push("student");
        }
        if payload.offer.is_none() {
            missing.push("offer");
        }
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))
            .into());
        }

        let state = match payload.state.as_deref() {
            Some(value) => value
                .parse::<ApplicationState>()
                .map_err(DomainError::InvalidState)?,
            None => ApplicationState::default(),
        };

        let application = ApplicationRepository::new(self.db)
            .create(NewApplication {
                state,
                student_id: payload.student.unwrap_or_default(),
                offer_id: payload.offer.unwrap_or_default(),
            })
            .await?;

        application_dto(application)
    }

    /// Lists every application with student and offer embeds
    pub async fn list(&self) -> Result<Vec<ApplicationDetailDto>, Error> {
        let applications = ApplicationRepository::new(self.db).list().await?;
        self.with_embeds(applications).await
    }

    /// Lists a student's applications, newest first, with embeds
    pub async fn list_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<ApplicationDetailDto>, Error> {
        let applications = ApplicationRepository::new(self.db)
            .list_by_student(student_id)
            .await?;
        self.with_embeds(applications).await
    }

    /// Lists the applications received by a company, newest first.
    ///
    /// Resolved in two steps: the company's offers, then every
    /// application targeting one of them.
    pub async fn list_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<ApplicationDetailDto>, Error> {
        let offers = OfferRepository::new(self.db)
            .list_by_company(company_id)
            .await?;
        let offer_ids: Vec<i32> = offers.iter().map(|offer| offer.id).collect();

        let applications = ApplicationRepository::new(self.db)
            .list_by_offer_ids(&offer_ids)
            .await?;
        self.with_embeds(applications).await
    }

    /// Moves an application to the given state
    pub async fn set_state(
        &self,
        id: i32,
        payload: ApplicationStateDto,
    ) -> Result<ApplicationDto, Error> {
        let state = payload
            .state
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| DomainError::Validation("Missing required fields: state".to_string()))?
            .parse::<ApplicationState>()
            .map_err(DomainError::InvalidState)?;

        let repository = ApplicationRepository::new(self.db);
        let application = repository
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Application"))?;

        application_dto(repository.set_state(application, state).await?)
    }

    /// Deletes an application
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ApplicationRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Application").into());
        }

        Ok(())
    }

    /// Resolves the student and offer embeds for a page of applications.
    ///
    /// Three reads regardless of page size: the referenced students, the
    /// referenced offers, and the companies those offers point at.
    async fn with_embeds(
        &self,
        applications: Vec<entity::application::Model>,
    ) -> Result<Vec<ApplicationDetailDto>, Error> {
        let account_repository = AccountRepository::new(self.db);

        let mut student_ids: Vec<i32> = applications
            .iter()
            .map(|application| application.student_id)
            .collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        let students: HashMap<i32, StudentSummaryDto> = account_repository
            .get_many_by_ids(&student_ids)
            .await?
            .iter()
            .filter(|account| account.role == Role::Student.as_str())
            .map(|account| (account.id, student_summary(account)))
            .collect();

        let mut offer_ids: Vec<i32> = applications
            .iter()
            .map(|application| application.offer_id)
            .collect();
        offer_ids.sort_unstable();
        offer_ids.dedup();

        let offers = OfferRepository::new(self.db)
            .get_many_by_ids(&offer_ids)
            .await?;

        let mut company_ids: Vec<i32> = offers.iter().map(|offer| offer.company_id).collect();
        company_ids.sort_unstable();
        company_ids.dedup();

        let companies: HashMap<i32, _> = account_repository
            .get_many_by_ids(&company_ids)
            .await?
            .iter()
            .filter(|account| account.role == Role::Company.as_str())
            .map(|account| {
                (
                    account.id,
                    crate::server::service::account::company_summary(account),
                )
            })
            .collect();

        let offers: HashMap<i32, OfferDetailDto> = offers
            .into_iter()
            .map(|offer| {
                let company = companies.get(&offer.company_id).cloned();
                (offer.id, offer_detail(offer, company))
            })
            .collect();

        applications
            .into_iter()
            .map(|application| {
                let student = students.get(&application.student_id).cloned();
                let offer = offers.get(&application.offer_id).cloned();
                application_detail(application, student, offer)
            })
            .collect()
    }
}

fn application_dto(application: entity::application::Model) -> Result<ApplicationDto, Error> {
    Ok(ApplicationDto {
        id: application.id,
        state: parse_stored_state(&application)?,
        student: application.student_id,
        offer: application.offer_id,
        created_at: application.created_at,
        updated_at: application.updated_at,
    })
}

fn application_detail(
    application: entity::application::Model,
    student: Option<StudentSummaryDto>,
    offer: Option<OfferDetailDto>,
) -> Result<ApplicationDetailDto, Error> {
    Ok(ApplicationDetailDto {
        id: application.id,
        state: parse_stored_state(&application)?,
        student,
        offer,
        created_at: application.created_at,
        updated_at: application.updated_at,
    })
}

fn parse_stored_state(application: &entity::application::Model) -> Result<ApplicationState, Error> {
    application.state.parse::<ApplicationState>().map_err(|_| {
        Error::InternalError(format!(
            "Application {} carries unrecognized state {:?}",
            application.id, application.state
        ))
    })
}
