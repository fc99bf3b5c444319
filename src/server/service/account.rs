use sea_orm::DatabaseConnection;

use crate::model::account::{
    Account, AccountBase, CompanyAccount, CompanySummaryDto, ProfessorAccount,
    ProfessorSummaryDto, Role, StudentAccount, StudentSummaryDto,
};
use crate::server::data::account::{
    AccountChanges, AccountReplacement, AccountRepository, NewAccount,
};
use crate::server::error::{domain::DomainError, Error};

/// Unvalidated account input, as collected from the role-specific
/// request bodies. Every field is optional; which ones are required is
/// decided per role at validation time. `external_id` is only ever set
/// by the registration flow, never by the directory endpoints.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub external_id: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub tax_id: Option<String>,
}

/// Service for the account directory.
///
/// Implements the shared CRUD semantics of the per-role collections:
/// required-field validation, cross-role email uniqueness, role-scoped
/// lookups, and the coordinator-driven company validation transition.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account of the given role.
    ///
    /// Validates the role's required fields, rejects emails already
    /// registered under any role, and stores only the columns that
    /// belong to the role. A company starts out unvalidated.
    pub async fn create(&self, role: Role, form: AccountForm) -> Result<Account, Error> {
        require_fields(role, &form)?;

        let repository = AccountRepository::new(self.db);

        let name = form.name.unwrap_or_default();
        let email = form.email.unwrap_or_default();

        if repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken(email).into());
        }

        let mut account = NewAccount {
            name,
            email,
            external_id: form.external_id,
            ..Default::default()
        };

        match role {
            Role::Student => {
                account.field_of_study = form.field_of_study;
                account.skills = form.skills;
                account.resume = form.resume;
            }
            Role::Professor => {
                account.department = form.department;
            }
            Role::Company => {
                account.tax_id = form.tax_id;
                account.validated = Some(false);
            }
            Role::Coordinator => {}
        }

        account_from_model(repository.create(role, account).await?)
    }

    /// Lists every account of the given role
    pub async fn list(&self, role: Role) -> Result<Vec<Account>, Error> {
        AccountRepository::new(self.db)
            .list_by_role(role)
            .await?
            .into_iter()
            .map(account_from_model)
            .collect()
    }

    /// Gets an account by id, scoped to the given role
    pub async fn get(&self, role: Role, id: i32) -> Result<Account, Error> {
        let account = AccountRepository::new(self.db)
            .get_by_id_and_role(id, role)
            .await?
            .ok_or(DomainError::NotFound(role.as_str()))?;

        account_from_model(account)
    }

    /// Fully replaces an account's updatable fields.
    ///
    /// Same validation as [`AccountService::create`]; the role and
    /// external id never change. An email change is re-checked for
    /// uniqueness against every role.
    pub async fn replace(&self, role: Role, id: i32, form: AccountForm) -> Result<Account, Error> {
        require_fields(role, &form)?;

        let repository = AccountRepository::new(self.db);

        let existing = repository
            .get_by_id_and_role(id, role)
            .await?
            .ok_or(DomainError::NotFound(role.as_str()))?;

        let name = form.name.unwrap_or_default();
        let email = form.email.unwrap_or_default();

        if email != existing.email && repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken(email).into());
        }

        let mut replacement = AccountReplacement {
            name,
            email,
            field_of_study: None,
            skills: None,
            resume: None,
            department: None,
            tax_id: None,
        };

        match role {
            Role::Student => {
                replacement.field_of_study = form.field_of_study;
                replacement.skills = form.skills;
                replacement.resume = form.resume;
            }
            Role::Professor => {
                replacement.department = form.department;
            }
            Role::Company => {
                replacement.tax_id = form.tax_id;
            }
            Role::Coordinator => {}
        }

        account_from_model(repository.replace(existing, replacement).await?)
    }

    /// Applies the provided fields of `form` to an account
    pub async fn patch(&self, role: Role, id: i32, form: AccountForm) -> Result<Account, Error> {
        let repository = AccountRepository::new(self.db);

        let existing = repository
            .get_by_id_and_role(id, role)
            .await?
            .ok_or(DomainError::NotFound(role.as_str()))?;

        if let Some(email) = form.email.as_deref() {
            if email != existing.email && repository.find_by_email(email).await?.is_some() {
                return Err(DomainError::EmailTaken(email.to_string()).into());
            }
        }

        let mut changes = AccountChanges {
            name: form.name,
            email: form.email,
            ..Default::default()
        };

        match role {
            Role::Student => {
                changes.field_of_study = form.field_of_study;
                changes.skills = form.skills;
                changes.resume = form.resume;
            }
            Role::Professor => {
                changes.department = form.department;
            }
            Role::Company => {
                changes.tax_id = form.tax_id;
            }
            Role::Coordinator => {}
        }

        account_from_model(repository.patch(existing, changes).await?)
    }

    /// Deletes an account by id, scoped to the given role.
    ///
    /// Offers, applications, and placements referencing the account keep
    /// their ids; embedded projections for them resolve to null.
    pub async fn delete(&self, role: Role, id: i32) -> Result<(), Error> {
        let result = AccountRepository::new(self.db).delete(id, role).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(role.as_str()).into());
        }

        Ok(())
    }

    /// Marks a company as validated, allowing it to publish offers.
    ///
    /// Idempotent: validating an already-validated company succeeds
    /// without touching the row.
    pub async fn validate_company(&self, id: i32) -> Result<Account, Error> {
        let repository = AccountRepository::new(self.db);

        let company = repository
            .get_by_id_and_role(id, Role::Company)
            .await?
            .ok_or(DomainError::NotFound(Role::Company.as_str()))?;

        if company.validated == Some(true) {
            return account_from_model(company);
        }

        account_from_model(repository.set_validated(company).await?)
    }
}

/// Rejects a form missing any of the role's required fields, listing the
/// missing ones by their wire names. Blank strings count as missing.
pub(crate) fn require_fields(role: Role, form: &AccountForm) -> Result<(), DomainError> {
    let mut missing = Vec::new();

    if is_blank(&form.name) {
        missing.push("name");
    }
    if is_blank(&form.email) {
        missing.push("email");
    }

    match role {
        Role::Student => {
            if is_blank(&form.field_of_study) {
                missing.push("fieldOfStudy");
            }
        }
        Role::Professor => {
            if is_blank(&form.department) {
                missing.push("department");
            }
        }
        Role::Company => {
            if is_blank(&form.tax_id) {
                missing.push("taxId");
            }
        }
        Role::Coordinator => {}
    }

    if missing.is_empty() {
        return Ok(());
    }

    Err(DomainError::Validation(format!(
        "Missing required fields: {}",
        missing.join(", ")
    )))
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |value| value.trim().is_empty())
}

/// Converts a directory row into the tagged [`Account`] union.
///
/// The role column decides the variant; a row carrying an unrecognized
/// role is a data error surfaced as an internal error.
pub(crate) fn account_from_model(model: entity::account::Model) -> Result<Account, Error> {
    let role = model.role.parse::<Role>().map_err(|_| {
        Error::InternalError(format!(
            "Account {} carries unrecognized role {:?}",
            model.id, model.role
        ))
    })?;

    let entity::account::Model {
        id,
        name,
        email,
        external_id,
        role: _,
        field_of_study,
        skills,
        resume,
        department,
        tax_id,
        validated,
        created_at,
        updated_at,
    } = model;

    let base = AccountBase {
        id,
        name,
        email,
        external_id,
        created_at,
        updated_at,
    };

    Ok(match role {
        Role::Student => Account::Student(StudentAccount {
            base,
            field_of_study: field_of_study.unwrap_or_default(),
            skills,
            resume,
        }),
        Role::Professor => Account::Professor(ProfessorAccount {
            base,
            department: department.unwrap_or_default(),
        }),
        Role::Company => Account::Company(CompanyAccount {
            base,
            tax_id: tax_id.unwrap_or_default(),
            validated: validated.unwrap_or(false),
        }),
        Role::Coordinator => Account::Coordinator(base),
    })
}

pub(crate) fn student_summary(model: &entity::account::Model) -> StudentSummaryDto {
    StudentSummaryDto {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
        field_of_study: model.field_of_study.clone(),
        skills: model.skills.clone(),
    }
}

pub(crate) fn professor_summary(model: &entity::account::Model) -> ProfessorSummaryDto {
    ProfessorSummaryDto {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
        department: model.department.clone(),
    }
}

pub(crate) fn company_summary(model: &entity::account::Model) -> CompanySummaryDto {
    CompanySummaryDto {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
        tax_id: model.tax_id.clone(),
    }
}
