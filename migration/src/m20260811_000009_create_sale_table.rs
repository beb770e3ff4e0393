use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000003_create_flock_table::Flock, m20260811_000008_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sale::Table)
                    .if_not_exists()
                    .col(pk_auto(Sale::Id))
                    .col(integer(Sale::FarmId))
                    .col(integer_null(Sale::CustomerId))
                    .col(integer_null(Sale::FlockId))
                    .col(string(Sale::Product))
                    .col(double(Sale::Quantity))
                    .col(double(Sale::UnitPrice))
                    .col(double(Sale::Total))
                    .col(date(Sale::SaleDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_customer_id")
                            .from(Sale::Table, Sale::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_flock_id")
                            .from(Sale::Table, Sale::FlockId)
                            .to(Flock::Table, Flock::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sale {
    Table,
    Id,
    FarmId,
    CustomerId,
    FlockId,
    Product,
    Quantity,
    UnitPrice,
    Total,
    SaleDate,
}
