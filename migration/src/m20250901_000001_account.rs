use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACCOUNT_EXTERNAL_ID: &str = "idx-account-external_id";
static IDX_ACCOUNT_TAX_ID: &str = "idx-account-tax_id";
static IDX_ACCOUNT_ROLE: &str = "idx-account-role";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::Name))
                    .col(string_uniq(Account::Email))
                    .col(string_null(Account::ExternalId))
                    .col(string(Account::Role))
                    .col(string_null(Account::FieldOfStudy))
                    .col(text_null(Account::Skills))
                    .col(text_null(Account::Resume))
                    .col(string_null(Account::Department))
                    .col(string_null(Account::TaxId))
                    .col(boolean_null(Account::Validated))
                    .col(timestamp(Account::CreatedAt))
                    .col(timestamp(Account::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_EXTERNAL_ID)
                    .table(Account::Table)
                    .col(Account::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_TAX_ID)
                    .table(Account::Table)
                    .col(Account::TaxId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_ROLE)
                    .table(Account::Table)
                    .col(Account::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_ROLE)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_TAX_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_EXTERNAL_ID)
                    .table(Account::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Name,
    Email,
    ExternalId,
    Role,
    FieldOfStudy,
    Skills,
    Resume,
    Department,
    TaxId,
    Validated,
    CreatedAt,
    UpdatedAt,
}
