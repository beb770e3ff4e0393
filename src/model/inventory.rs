use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InventoryItemDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
    /// True when quantity has fallen to or below the reorder level.
    pub needs_reorder: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertInventoryItemDto {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InventoryTransactionDto {
    pub id: i32,
    pub item_id: i32,
    pub delta: f64,
    pub reason: String,
    pub recorded_at: NaiveDateTime,
}

/// Signed stock adjustment; positive restocks, negative consumes.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateInventoryTransactionDto {
    pub delta: f64,
    pub reason: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedInventoryItemsDto {
    pub items: Vec<InventoryItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
