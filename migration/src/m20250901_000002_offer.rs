use sea_orm_migration::{prelude::*, schema::*};

static IDX_OFFER_COMPANY_ID: &str = "idx-offer-company_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(string(Offer::Title))
                    .col(text_null(Offer::Description))
                    .col(string_null(Offer::Duration))
                    .col(string_null(Offer::Location))
                    .col(integer(Offer::CompanyId))
                    .col(timestamp(Offer::CreatedAt))
                    .col(timestamp(Offer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFER_COMPANY_ID)
                    .table(Offer::Table)
                    .col(Offer::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFER_COMPANY_ID)
                    .table(Offer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    Title,
    Description,
    Duration,
    Location,
    CompanyId,
    CreatedAt,
    UpdatedAt,
}
