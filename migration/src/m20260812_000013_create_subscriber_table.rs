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
                    .table(Subscriber::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscriber::Id))
                    .col(integer_uniq(Subscriber::FarmId))
                    .col(string(Subscriber::ProviderCustomerId))
                    .col(string_null(Subscriber::ProviderSubscriptionId))
                    .col(string(Subscriber::Plan))
                    .col(string(Subscriber::Status))
                    .col(timestamp_null(Subscriber::CurrentPeriodEnd))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriber_farm_id")
                            .from(Subscriber::Table, Subscriber::FarmId)
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
            .drop_table(Table::drop().table(Subscriber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscriber {
    Table,
    Id,
    FarmId,
    ProviderCustomerId,
    ProviderSubscriptionId,
    Plan,
    Status,
    CurrentPeriodEnd,
}
