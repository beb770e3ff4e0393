use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000003_create_flock_table::Flock;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EggProduction::Table)
                    .if_not_exists()
                    .col(pk_auto(EggProduction::Id))
                    .col(integer(EggProduction::FarmId))
                    .col(integer(EggProduction::FlockId))
                    .col(date(EggProduction::RecordDate))
                    .col(integer(EggProduction::EggsCollected))
                    .col(integer(EggProduction::EggsDamaged))
                    .col(text_null(EggProduction::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_egg_production_flock_id")
                            .from(EggProduction::Table, EggProduction::FlockId)
                            .to(Flock::Table, Flock::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EggProduction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EggProduction {
    Table,
    Id,
    FarmId,
    FlockId,
    RecordDate,
    EggsCollected,
    EggsDamaged,
    Notes,
}
