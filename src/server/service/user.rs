//! User management for farm admins.
//!
//! Staff accounts are created by an admin rather than through open
//! registration, so every method here runs behind the admin permission
//! check in the middleware.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, PaginatedUsers, User},
    service::{
        audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
        auth::{hash_password, validate_password},
    },
};

const ENTITY: &str = "user";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|user| user.farm_id == farm_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: super::total_pages(total, per_page),
        })
    }

    /// Creates a staff account on the admin's farm.
    pub async fn create_staff(
        &self,
        farm_id: i32,
        admin_id: i32,
        email: String,
        password: String,
        display_name: String,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        validate_password(&password)?;
        if user_repo.email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&password)?;
        let user = user_repo
            .create(CreateUserParam {
                farm_id,
                email,
                password_hash,
                display_name,
                is_staff: true,
            })
            .await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                admin_id,
                AUDIT_CREATE,
                ENTITY,
                Some(user.id),
                Some(user.email.clone()),
            )
            .await?;

        Ok(user)
    }

    /// Promotes or demotes an account on the admin's farm.
    ///
    /// Admins cannot change their own role; this guarantees every farm keeps
    /// at least one admin.
    pub async fn set_role(
        &self,
        farm_id: i32,
        admin_id: i32,
        user_id: i32,
        is_staff: bool,
    ) -> Result<User, AppError> {
        if user_id == admin_id {
            return Err(AppError::BadRequest(
                "You cannot change your own role".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let changed = user_repo.set_role(farm_id, user_id, is_staff).await?;
        if !changed {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        AuditService::new(self.db)
            .record(
                farm_id,
                admin_id,
                AUDIT_UPDATE,
                ENTITY,
                Some(user_id),
                Some(if is_staff { "demoted to staff" } else { "promoted to admin" }.to_string()),
            )
            .await?;

        self.get_by_id(farm_id, user_id).await
    }

    /// Removes an account from the admin's farm. Self-deletion is rejected
    /// for the same reason self-demotion is.
    pub async fn delete(&self, farm_id: i32, admin_id: i32, user_id: i32) -> Result<(), AppError> {
        if user_id == admin_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let deleted = UserRepository::new(self.db).delete(farm_id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, admin_id, AUDIT_DELETE, ENTITY, Some(user_id), None)
            .await?;

        Ok(())
    }
}
