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
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(integer(User::FarmId))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string(User::DisplayName))
                    .col(boolean(User::IsStaff).default(false))
                    .col(boolean(User::TwoFactorEnabled).default(false))
                    .col(string_null(User::OtpCodeHash))
                    .col(timestamp_null(User::OtpExpiresAt))
                    .col(string_null(User::RefreshToken))
                    .col(timestamp_null(User::RefreshTokenExpiresAt))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_farm_id")
                            .from(User::Table, User::FarmId)
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
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FarmId,
    Email,
    PasswordHash,
    DisplayName,
    IsStaff,
    TwoFactorEnabled,
    OtpCodeHash,
    OtpExpiresAt,
    RefreshToken,
    RefreshTokenExpiresAt,
    CreatedAt,
}
