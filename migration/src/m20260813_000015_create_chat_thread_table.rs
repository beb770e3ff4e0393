use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_farm_table::Farm, m20260810_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatThread::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatThread::Id))
                    .col(integer(ChatThread::FarmId))
                    .col(string(ChatThread::Subject))
                    .col(integer(ChatThread::CreatedBy))
                    .col(
                        timestamp(ChatThread::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_thread_farm_id")
                            .from(ChatThread::Table, ChatThread::FarmId)
                            .to(Farm::Table, Farm::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_thread_created_by")
                            .from(ChatThread::Table, ChatThread::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatThread::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatThread {
    Table,
    Id,
    FarmId,
    Subject,
    CreatedBy,
    CreatedAt,
}
