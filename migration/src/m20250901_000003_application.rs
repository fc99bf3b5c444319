use sea_orm_migration::{prelude::*, schema::*};

static IDX_APPLICATION_STUDENT_ID: &str = "idx-application-student_id";
static IDX_APPLICATION_OFFER_ID: &str = "idx-application-offer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::State))
                    .col(integer(Application::StudentId))
                    .col(integer(Application::OfferId))
                    .col(timestamp(Application::CreatedAt))
                    .col(timestamp(Application::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_STUDENT_ID)
                    .table(Application::Table)
                    .col(Application::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_OFFER_ID)
                    .table(Application::Table)
                    .col(Application::OfferId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_OFFER_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_STUDENT_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    State,
    StudentId,
    OfferId,
    CreatedAt,
    UpdatedAt,
}
