//! Account directory table.
//!
//! One row per account regardless of role; role-specific columns are
//! nullable and only populated for the role they belong to. References
//! from other tables point at `id` without foreign keys.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Subject id assigned by the identity provider, absent for accounts
    /// created directly through the directory endpoints.
    #[sea_orm(unique)]
    pub external_id: Option<String>,
    pub role: String,
    pub field_of_study: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<String>,
    pub department: Option<String>,
    #[sea_orm(unique)]
    pub tax_id: Option<String>,
    pub validated: Option<bool>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
