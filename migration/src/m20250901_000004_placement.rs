use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLACEMENT_STUDENT_ID: &str = "idx-placement-student_id";
static IDX_PLACEMENT_PROFESSOR_ID: &str = "idx-placement-professor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Placement::Table)
                    .if_not_exists()
                    .col(pk_auto(Placement::Id))
                    .col(date(Placement::StartDate))
                    .col(date_null(Placement::EndDate))
                    .col(string(Placement::State))
                    .col(integer(Placement::StudentId))
                    .col(integer(Placement::ProfessorId))
                    .col(timestamp(Placement::CreatedAt))
                    .col(timestamp(Placement::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACEMENT_STUDENT_ID)
                    .table(Placement::Table)
                    .col(Placement::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACEMENT_PROFESSOR_ID)
                    .table(Placement::Table)
                    .col(Placement::ProfessorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACEMENT_PROFESSOR_ID)
                    .table(Placement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLACEMENT_STUDENT_ID)
                    .table(Placement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Placement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Placement {
    Table,
    Id,
    StartDate,
    EndDate,
    State,
    StudentId,
    ProfessorId,
    CreatedAt,
    UpdatedAt,
}
