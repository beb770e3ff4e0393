use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct FarmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FarmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a farm row; called once per registration.
    pub async fn create(&self, name: String) -> Result<entity::farm::Model, DbErr> {
        entity::prelude::Farm::insert(entity::farm::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}
