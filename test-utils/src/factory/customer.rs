use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a customer with generated unique values.
///
/// # Arguments
/// - `db` - Database connection
/// - `farm_id` - Farm the customer belongs to
///
/// # Returns
/// - `Ok(entity::customer::Model)` - Created customer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_customer(
    db: &DatabaseConnection,
    farm_id: i32,
) -> Result<entity::customer::Model, DbErr> {
    let id = next_id();
    entity::customer::ActiveModel {
        farm_id: ActiveValue::Set(farm_id),
        name: ActiveValue::Set(format!("Customer {}", id)),
        phone: ActiveValue::Set(None),
        email: ActiveValue::Set(Some(format!("customer{}@example.com", id))),
        address: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
