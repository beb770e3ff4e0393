//! User data repository for database operations.
//!
//! Handles account creation, credential lookups, OTP and refresh-token column
//! updates, and admin user management. Credential-bearing lookups
//! (`find_by_email`, `find_by_refresh_token`) are global since they run before
//! a farm scope is established; everything else is farm-scoped.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// # Arguments
    /// - `param` - Creation parameters; the password hash is computed by the
    ///   auth service before it reaches this layer
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            farm_id: ActiveValue::Set(param.farm_id),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            display_name: ActiveValue::Set(param.display_name),
            is_staff: ActiveValue::Set(param.is_staff),
            two_factor_enabled: ActiveValue::Set(false),
            otp_code_hash: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            refresh_token: ActiveValue::Set(None),
            refresh_token_expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key. Used by the auth guard after token
    /// validation; not farm-scoped because the farm comes from the token.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email for login. Emails are globally unique.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether any account already uses the given email.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the user holding the given refresh token, if any.
    pub async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::RefreshToken.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Stores or clears the refresh token on a user row.
    ///
    /// Pass `None` for both arguments on logout; rotation passes the new
    /// token and its expiry.
    pub async fn set_refresh_token(
        &self,
        user_id: i32,
        token: Option<String>,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::RefreshToken,
                sea_orm::sea_query::Expr::value(token),
            )
            .col_expr(
                entity::user::Column::RefreshTokenExpiresAt,
                sea_orm::sea_query::Expr::value(expires_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores or clears the pending OTP challenge on a user row.
    pub async fn set_otp(
        &self,
        user_id: i32,
        code_hash: Option<String>,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::OtpCodeHash,
                sea_orm::sea_query::Expr::value(code_hash),
            )
            .col_expr(
                entity::user::Column::OtpExpiresAt,
                sea_orm::sea_query::Expr::value(expires_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Toggles the email second factor for a user.
    pub async fn set_two_factor(&self, user_id: i32, enabled: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::TwoFactorEnabled,
                sea_orm::sea_query::Expr::value(enabled),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the staff role flag for a user of the given farm.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No user with that id on that farm
    pub async fn set_role(&self, farm_id: i32, user_id: i32, is_staff: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::FarmId.eq(farm_id))
            .col_expr(
                entity::user::Column::IsStaff,
                sea_orm::sea_query::Expr::value(is_staff),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes a user of the given farm.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No user with that id on that farm
    pub async fn delete(&self, farm_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets all users of a farm with pagination, ordered by display name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user
    ///   count for the farm
    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .filter(entity::user::Column::FarmId.eq(farm_id))
            .order_by_asc(entity::user::Column::DisplayName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }
}
