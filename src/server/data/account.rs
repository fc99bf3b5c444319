use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::account::Role;

/// Column values for a new account row.
///
/// Role-specific fields are left `None` for the roles they do not apply
/// to; the single `account` table holds all four roles.
#[derive(Debug, Clone, Default)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub external_id: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub tax_id: Option<String>,
    pub validated: Option<bool>,
}

/// Full overwrite of an account's mutable columns, used by PUT
/// handlers. `validated` is deliberately absent; it only changes
/// through [`AccountRepository::set_validated`].
#[derive(Debug, Clone)]
pub struct AccountReplacement {
    pub name: String,
    pub email: String,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub tax_id: Option<String>,
}

/// Partial update of an account; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub tax_id: Option<String>,
}

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account row with the given role
    pub async fn create(
        &self,
        role: Role,
        account: NewAccount,
    ) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let account = entity::account::ActiveModel {
            name: ActiveValue::Set(account.name),
            email: ActiveValue::Set(account.email),
            external_id: ActiveValue::Set(account.external_id),
            role: ActiveValue::Set(role.to_string()),
            field_of_study: ActiveValue::Set(account.field_of_study),
            skills: ActiveValue::Set(account.skills),
            resume: ActiveValue::Set(account.resume),
            department: ActiveValue::Set(account.department),
            tax_id: ActiveValue::Set(account.tax_id),
            validated: ActiveValue::Set(account.validated),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Gets an account by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id).one(self.db).await
    }

    /// Gets an account by primary key, but only when its role matches
    ///
    /// Role-scoped endpoints use this so that, for example, a professor
    /// id requested through the students collection comes back as not
    /// found rather than leaking the row.
    pub async fn get_by_id_and_role(
        &self,
        id: i32,
        role: Role,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id)
            .filter(entity::account::Column::Role.eq(role.as_str()))
            .one(self.db)
            .await
    }

    /// Lists every account with the given role
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Role.eq(role.as_str()))
            .all(self.db)
            .await
    }

    /// Finds an account by email, across all roles
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds an account by the identity provider's subject id
    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await
    }

    /// Gets every account whose id is in `ids`, in no particular order
    pub async fn get_many_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::account::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Account::find()
            .filter(entity::account::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Overwrites every mutable column of an account
    pub async fn replace(
        &self,
        account: entity::account::Model,
        replacement: AccountReplacement,
    ) -> Result<entity::account::Model, DbErr> {
        let mut account = account.into_active_model();

        account.name = ActiveValue::Set(replacement.name);
        account.email = ActiveValue::Set(replacement.email);
        account.field_of_study = ActiveValue::Set(replacement.field_of_study);
        account.skills = ActiveValue::Set(replacement.skills);
        account.resume = ActiveValue::Set(replacement.resume);
        account.department = ActiveValue::Set(replacement.department);
        account.tax_id = ActiveValue::Set(replacement.tax_id);
        account.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        account.update(self.db).await
    }

    /// Applies the provided columns of `changes` to an account
    pub async fn patch(
        &self,
        account: entity::account::Model,
        changes: AccountChanges,
    ) -> Result<entity::account::Model, DbErr> {
        let mut account = account.into_active_model();

        if let Some(name) = changes.name {
            account.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            account.email = ActiveValue::Set(email);
        }
        if let Some(field_of_study) = changes.field_of_study {
            account.field_of_study = ActiveValue::Set(Some(field_of_study));
        }
        if let Some(skills) = changes.skills {
            account.skills = ActiveValue::Set(Some(skills));
        }
        if let Some(resume) = changes.resume {
            account.resume = ActiveValue::Set(Some(resume));
        }
        if let Some(department) = changes.department {
            account.department = ActiveValue::Set(Some(department));
        }
        if let Some(tax_id) = changes.tax_id {
            account.tax_id = ActiveValue::Set(Some(tax_id));
        }
        account.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        account.update(self.db).await
    }

    /// Marks a company account as validated
    pub async fn set_validated(
        &self,
        account: entity::account::Model,
    ) -> Result<entity::account::Model, DbErr> {
        let mut account = account.into_active_model();

        account.validated = ActiveValue::Set(Some(true));
        account.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        account.update(self.db).await
    }

    /// Deletes an account only when its role matches
    ///
    /// Returns OK regardless of the account existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32, role: Role) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_many()
            .filter(entity::account::Column::Id.eq(id))
            .filter(entity::account::Column::Role.eq(role.as_str()))
            .exec(self.db)
            .await
    }

    /// Deletes an account by primary key, regardless of role
    pub async fn delete_by_id(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(id).exec(self.db).await
    }
}
