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
                    .table(FeedUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(FeedUsage::Id))
                    .col(integer(FeedUsage::FarmId))
                    .col(integer(FeedUsage::FlockId))
                    .col(date(FeedUsage::RecordDate))
                    .col(string(FeedUsage::FeedType))
                    .col(double(FeedUsage::QuantityKg))
                    .col(double(FeedUsage::Cost))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feed_usage_flock_id")
                            .from(FeedUsage::Table, FeedUsage::FlockId)
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
            .drop_table(Table::drop().table(FeedUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FeedUsage {
    Table,
    Id,
    FarmId,
    FlockId,
    RecordDate,
    FeedType,
    QuantityKg,
    Cost,
}
