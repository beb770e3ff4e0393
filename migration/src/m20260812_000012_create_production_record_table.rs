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
                    .table(ProductionRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductionRecord::Id))
                    .col(integer(ProductionRecord::FarmId))
                    .col(integer(ProductionRecord::FlockId))
                    .col(date(ProductionRecord::RecordDate))
                    .col(integer(ProductionRecord::Mortality))
                    .col(double(ProductionRecord::AverageWeightKg))
                    .col(text_null(ProductionRecord::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_production_record_flock_id")
                            .from(ProductionRecord::Table, ProductionRecord::FlockId)
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
            .drop_table(Table::drop().table(ProductionRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductionRecord {
    Table,
    Id,
    FarmId,
    FlockId,
    RecordDate,
    Mortality,
    AverageWeightKg,
    Notes,
}
