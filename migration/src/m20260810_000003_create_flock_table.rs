use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_farm_table::Farm;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flock::Table)
                    .if_not_exists()
                    .col(pk_auto(Flock::Id))
                    .col(integer(Flock::FarmId))
                    .col(string(Flock::Name))
                    .col(string(Flock::Breed))
                    .col(string(Flock::BatchCode))
                    .col(integer(Flock::BirdCount))
                    .col(date(Flock::AcquiredAt))
                    .col(string(Flock::Status))
                    .col(text_null(Flock::Notes))
                    .col(
                        timestamp(Flock::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flock_farm_id")
                            .from(Flock::Table, Flock::FarmId)
                            .to(Farm::Table, Farm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flock {
    Table,
    Id,
    FarmId,
    Name,
    Breed,
    BatchCode,
    BirdCount,
    AcquiredAt,
    Status,
    Notes,
    CreatedAt,
}
