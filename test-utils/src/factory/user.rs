//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, farm.id)
///     .email("owner@example.com")
///     .display_name("Owner")
///     .staff(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    farm_id: i32,
    email: String,
    password_hash: String,
    display_name: String,
    is_staff: bool,
    two_factor_enabled: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - password_hash: a fixed placeholder hash
    /// - display_name: `"User {id}"`
    /// - is_staff: `false`
    /// - two_factor_enabled: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `farm_id` - Farm the user belongs to
    pub fn new(db: &'a DatabaseConnection, farm_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            farm_id,
            email: format!("user{}@example.com", id),
            password_hash: "$argon2id$test-placeholder".to_string(),
            display_name: format!("User {}", id),
            is_staff: false,
            two_factor_enabled: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn staff(mut self, is_staff: bool) -> Self {
        self.is_staff = is_staff;
        self
    }

    pub fn two_factor(mut self, enabled: bool) -> Self {
        self.two_factor_enabled = enabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            farm_id: ActiveValue::Set(self.farm_id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            display_name: ActiveValue::Set(self.display_name),
            is_staff: ActiveValue::Set(self.is_staff),
            two_factor_enabled: ActiveValue::Set(self.two_factor_enabled),
            otp_code_hash: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            refresh_token: ActiveValue::Set(None),
            refresh_token_expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db, farm_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `farm_id` - Farm the user belongs to
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(
    db: &DatabaseConnection,
    farm_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, farm_id).build().await
}

/// Creates a staff user with default values.
pub async fn create_staff_user(
    db: &DatabaseConnection,
    farm_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, farm_id).staff(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let farm = crate::factory::farm::create_farm(db).await?;
        let user = create_user(db, farm.id).await?;

        assert!(!user.email.is_empty());
        assert!(!user.display_name.is_empty());
        assert!(!user.is_staff);
        assert!(!user.two_factor_enabled);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let farm = crate::factory::farm::create_farm(db).await?;
        let user = UserFactory::new(db, farm.id)
            .email("owner@example.com")
            .display_name("Owner")
            .staff(true)
            .build()
            .await?;

        assert_eq!(user.email, "owner@example.com");
        assert_eq!(user.display_name, "Owner");
        assert!(user.is_staff);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let farm = crate::factory::farm::create_farm(db).await?;
        let user1 = create_user(db, farm.id).await?;
        let user2 = create_user(db, farm.id).await?;

        assert_ne!(user1.email, user2.email);
        assert_ne!(user1.display_name, user2.display_name);

        Ok(())
    }
}
