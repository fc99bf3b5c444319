use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::model::account::{ProfessorSummaryDto, Role, StudentSummaryDto};
use crate::model::placement::{
    PlacementDetailDto, PlacementDto, PlacementPayloadDto, PlacementState,
};
use crate::server::data::account::AccountRepository;
use crate::server::data::placement::{NewPlacement, PlacementRepository};
use crate::server::error::{domain::DomainError, Error};
use crate::server::service::account::{professor_summary, student_summary};

/// Service for internship placements.
///
/// A placement pairs a student with a supervising professor from an
/// agreed start date. References are opaque ids like everywhere else;
/// listings embed what still resolves.
pub struct PlacementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlacementService<'a> {
    /// Creates a new instance of [`PlacementService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a placement, ATIVO unless a state is given.
    ///
    /// No ordering is enforced between start and end date.
    pub async fn create(&self, payload: PlacementPayloadDto) -> Result<PlacementDto, Error> {
        let placement = PlacementRepository::new(self.db)
            .create(validated_placement(&payload)?)
            .await?;

        placement_dto(placement)
    }

    /// Lists every placement with student and professor embeds
    pub async fn list(&self) -> Result<Vec<PlacementDetailDto>, Error> {
        let placements = PlacementRepository::new(self.db).list().await?;
        self.with_embeds(placements).await
    }

    /// Gets a placement by id with embeds
    pub async fn get(&self, id: i32) -> Result<PlacementDetailDto, Error> {
        let placement = PlacementRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Placement"))?;

        let mut detailed = self.with_embeds(vec![placement]).await?;
        detailed
            .pop()
            .ok_or_else(|| Error::InternalError("Placement embed resolution lost the row".to_string()))
    }

    /// Fully replaces a placement, with the same validation as create
    pub async fn replace(&self, id: i32, payload: PlacementPayloadDto) -> Result<PlacementDto, Error> {
        let replacement = validated_placement(&payload)?;

        let repository = PlacementRepository::new(self.db);
        let existing = repository
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Placement"))?;

        placement_dto(repository.replace(existing, replacement).await?)
    }

    /// Deletes a placement
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = PlacementRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound("Placement").into());
        }

        Ok(())
    }

    /// Resolves the student and professor embeds with a single account
    /// read for both roles.
    async fn with_embeds(
        &self,
        placements: Vec<entity::placement::Model>,
    ) -> Result<Vec<PlacementDetailDto>, Error> {
        let mut account_ids: Vec<i32> = placements
            .iter()
            .flat_map(|placement| [placement.student_id, placement.professor_id])
            .collect();
        account_ids.sort_unstable();
        account_ids.dedup();

        let accounts = AccountRepository::new(self.db)
            .get_many_by_ids(&account_ids)
            .await?;

        let students: HashMap<i32, StudentSummaryDto> = accounts
            .iter()
            .filter(|account| account.role == Role::Student.as_str())
            .map(|account| (account.id, student_summary(account)))
            .collect();

        let professors: HashMap<i32, ProfessorSummaryDto> = accounts
            .iter()
            .filter(|account| account.role == Role::Professor.as_str())
            .map(|account| (account.id, professor_summary(account)))
            .collect();

        placements
            .into_iter()
            .map(|placement| {
                let student = students.get(&placement.student_id).cloned();
                let professor = professors.get(&placement.professor_id).cloned();
                placement_detail(placement, student, professor)
            })
            .collect()
    }
}

fn validated_placement(payload: &PlacementPayloadDto) -> Result<NewPlacement, Error> {
    let mut missing = Vec::new();

    if payload.start_date.is_none() {
        missing.push("startDate");
    }
    if payload.student.is_none() {
        missing.push("student");
    }
    if payload.professor.is_none() {
        missing.push("professor");
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
            .parse::<PlacementState>()
            .map_err(DomainError::InvalidState)?,
        None => PlacementState::default(),
    };

    Ok(NewPlacement {
        start_date: payload.start_date.unwrap_or_default(),
        end_date: payload.end_date,
        state,
        student_id: payload.student.unwrap_or_default(),
        professor_id: payload.professor.unwrap_or_default(),
    })
}

fn placement_dto(placement: entity::placement::Model) -> Result<PlacementDto, Error> {
    Ok(PlacementDto {
        id: placement.id,
        start_date: placement.start_date,
        end_date: placement.end_date,
        state: parse_stored_state(&placement)?,
        student: placement.student_id,
        professor: placement.professor_id,
        created_at: placement.created_at,
        updated_at: placement.updated_at,
    })
}

fn placement_detail(
    placement: entity::placement::Model,
    student: Option<StudentSummaryDto>,
    professor: Option<ProfessorSummaryDto>,
) -> Result<PlacementDetailDto, Error> {
    Ok(PlacementDetailDto {
        id: placement.id,
        start_date: placement.start_date,
        end_date: placement.end_date,
        state: parse_stored_state(&placement)?,
        student,
        professor,
        created_at: placement.created_at,
        updated_at: placement.updated_at,
    })
}

fn parse_stored_state(placement: &entity::placement::Model) -> Result<PlacementState, Error> {
    placement.state.parse::<PlacementState>().map_err(|_| {
        Error::InternalError(format!(
            "Placement {} carries unrecognized state {:?}",
            placement.id, placement.state
        ))
    })
}
