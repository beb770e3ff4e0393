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
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(integer(Customer::FarmId))
                    .col(string(Customer::Name))
                    .col(string_null(Customer::Phone))
                    .col(string_null(Customer::Email))
                    .col(string_null(Customer::Address))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_farm_id")
                            .from(Customer::Table, Customer::FarmId)
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
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FarmId,
    Name,
    Phone,
    Email,
    Address,
}
