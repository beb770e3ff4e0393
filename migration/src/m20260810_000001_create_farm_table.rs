use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farm::Table)
                    .if_not_exists()
                    .col(pk_auto(Farm::Id))
                    .col(string(Farm::Name))
                    .col(
                        timestamp(Farm::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Farm {
    Table,
    Id,
    Name,
    CreatedAt,
}
