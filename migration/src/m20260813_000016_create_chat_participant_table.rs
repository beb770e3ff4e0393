use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000002_create_user_table::User,
    m20260813_000015_create_chat_thread_table::ChatThread,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatParticipant::Id))
                    .col(integer(ChatParticipant::ThreadId))
                    .col(integer(ChatParticipant::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participant_thread_id")
                            .from(ChatParticipant::Table, ChatParticipant::ThreadId)
                            .to(ChatThread::Table, ChatThread::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participant_user_id")
                            .from(ChatParticipant::Table, ChatParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chat_participant_thread_user")
                    .table(ChatParticipant::Table)
                    .col(ChatParticipant::ThreadId)
                    .col(ChatParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatParticipant {
    Table,
    Id,
    ThreadId,
    UserId,
}
