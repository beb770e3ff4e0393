//! Flock factory for creating test flock entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test flocks with customizable fields.
pub struct FlockFactory<'a> {
    db: &'a DatabaseConnection,
    farm_id: i32,
    name: String,
    breed: String,
    batch_code: String,
    bird_count: i32,
    status: String,
}

impl<'a> FlockFactory<'a> {
    /// Creates a new FlockFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Flock {id}"` where id is auto-incremented
    /// - breed: `"Leghorn"`
    /// - batch_code: `"B{id}"`
    /// - bird_count: `100`
    /// - status: `"active"`
    pub fn new(db: &'a DatabaseConnection, farm_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            farm_id,
            name: format!("Flock {}", id),
            breed: "Leghorn".to_string(),
            batch_code: format!("B{}", id),
            bird_count: 100,
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn bird_count(mut self, bird_count: i32) -> Self {
        self.bird_count = bird_count;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the flock entity into the database.
    pub async fn build(self) -> Result<entity::flock::Model, DbErr> {
        let now = Utc::now();
        entity::flock::ActiveModel {
            farm_id: ActiveValue::Set(self.farm_id),
            name: ActiveValue::Set(self.name),
            breed: ActiveValue::Set(self.breed),
            batch_code: ActiveValue::Set(self.batch_code),
            bird_count: ActiveValue::Set(self.bird_count),
            acquired_at: ActiveValue::Set(now.date_naive()),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now.naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flock with default values.
///
/// Shorthand for `FlockFactory::new(db, farm_id).build().await`.
pub async fn create_flock(
    db: &DatabaseConnection,
    farm_id: i32,
) -> Result<entity::flock::Model, DbErr> {
    FlockFactory::new(db, farm_id).build().await
}
