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
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(integer(Expense::FarmId))
                    .col(integer_null(Expense::FlockId))
                    .col(string(Expense::Category))
                    .col(string(Expense::Description))
                    .col(double(Expense::Amount))
                    .col(date(Expense::ExpenseDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_flock_id")
                            .from(Expense::Table, Expense::FlockId)
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
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    FarmId,
    FlockId,
    Category,
    Description,
    Amount,
    ExpenseDate,
}
