use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a farm with a generated unique name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::farm::Model)` - Created farm entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_farm(db: &DatabaseConnection) -> Result<entity::farm::Model, DbErr> {
    let id = next_id();
    entity::farm::ActiveModel {
        name: ActiveValue::Set(format!("Farm {}", id)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
