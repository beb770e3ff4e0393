use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test inventory items with customizable fields.
pub struct InventoryItemFactory<'a> {
    db: &'a DatabaseConnection,
    farm_id: i32,
    name: String,
    category: String,
    quantity: f64,
    unit: String,
    reorder_level: f64,
}

impl<'a> InventoryItemFactory<'a> {
    /// Creates a new InventoryItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - category: `"feed"`
    /// - quantity: `50.0`
    /// - unit: `"kg"`
    /// - reorder_level: `10.0`
    pub fn new(db: &'a DatabaseConnection, farm_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            farm_id,
            name: format!("Item {}", id),
            category: "feed".to_string(),
            quantity: 50.0,
            unit: "kg".to_string(),
            reorder_level: 10.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn reorder_level(mut self, reorder_level: f64) -> Self {
        self.reorder_level = reorder_level;
        self
    }

    /// Builds and inserts the inventory item entity into the database.
    pub async fn build(self) -> Result<entity::inventory_item::Model, DbErr> {
        entity::inventory_item::ActiveModel {
            farm_id: ActiveValue::Set(self.farm_id),
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            quantity: ActiveValue::Set(self.quantity),
            unit: ActiveValue::Set(self.unit),
            reorder_level: ActiveValue::Set(self.reorder_level),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory item with default values.
///
/// Shorthand for `InventoryItemFactory::new(db, farm_id).build().await`.
pub async fn create_inventory_item(
    db: &DatabaseConnection,
    farm_id: i32,
) -> Result<entity::inventory_item::Model, DbErr> {
    InventoryItemFactory::new(db, farm_id).build().await
}
