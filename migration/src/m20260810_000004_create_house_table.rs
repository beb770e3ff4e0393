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
                    .table(House::Table)
                    .if_not_exists()
                    .col(pk_auto(House::Id))
                    .col(integer(House::FarmId))
                    .col(string(House::Name))
                    .col(integer(House::Capacity))
                    .col(string_null(House::Location))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_house_farm_id")
                            .from(House::Table, House::FarmId)
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
            .drop_table(Table::drop().table(House::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum House {
    Table,
    Id,
    FarmId,
    Name,
    Capacity,
    Location,
}
