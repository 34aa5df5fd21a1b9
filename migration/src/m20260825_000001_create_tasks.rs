use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .col(pk_auto(Tasks::Id))
                    .col(string(Tasks::NomTask))
                    .col(string(Tasks::NomEmploye))
                    .col(date_time(Tasks::DateDebut))
                    .col(date_time(Tasks::DateFin))
                    .col(boolean(Tasks::Complete).default(false))
                    .col(date_time(Tasks::CreatedAt))
                    .col(date_time(Tasks::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    NomTask,
    NomEmploye,
    DateDebut,
    DateFin,
    Complete,
    CreatedAt,
    UpdatedAt,
}
