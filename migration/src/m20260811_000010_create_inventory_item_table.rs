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
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItem::Id))
                    .col(integer(InventoryItem::FarmId))
                    .col(string(InventoryItem::Name))
                    .col(string(InventoryItem::Category))
                    .col(double(InventoryItem::Quantity))
                    .col(string(InventoryItem::Unit))
                    .col(double(InventoryItem::ReorderLevel))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_item_farm_id")
                            .from(InventoryItem::Table, InventoryItem::FarmId)
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
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InventoryItem {
    Table,
    Id,
    FarmId,
    Name,
    Category,
    Quantity,
    Unit,
    ReorderLevel,
}
