use sea_orm_migration::{prelude::*, schema::*};

use super::m20260811_000010_create_inventory_item_table::InventoryItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryTransaction::Id))
                    .col(integer(InventoryTransaction::FarmId))
                    .col(integer(InventoryTransaction::ItemId))
                    .col(double(InventoryTransaction::Delta))
                    .col(string(InventoryTransaction::Reason))
                    .col(
                        timestamp(InventoryTransaction::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_transaction_item_id")
                            .from(InventoryTransaction::Table, InventoryTransaction::ItemId)
                            .to(InventoryItem::Table, InventoryItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InventoryTransaction {
    Table,
    Id,
    FarmId,
    ItemId,
    Delta,
    Reason,
    RecordedAt,
}
