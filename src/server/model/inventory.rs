//! Inventory item and stock transaction domain models.

use chrono::NaiveDateTime;

use crate::model::inventory::{
    InventoryItemDto, InventoryTransactionDto, PaginatedInventoryItemsDto, UpsertInventoryItemDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
}

impl InventoryItem {
    pub fn from_entity(entity: entity::inventory_item::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            name: entity.name,
            category: entity.category,
            quantity: entity.quantity,
            unit: entity.unit,
            reorder_level: entity.reorder_level,
        }
    }

    pub fn into_dto(self) -> InventoryItemDto {
        let needs_reorder = self.quantity <= self.reorder_level;
        InventoryItemDto {
            id: self.id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            reorder_level: self.reorder_level,
            needs_reorder,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertInventoryItemParam {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
}

impl UpsertInventoryItemParam {
    pub fn from_dto(dto: UpsertInventoryItemDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            quantity: dto.quantity,
            unit: dto.unit,
            reorder_level: dto.reorder_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryTransaction {
    pub id: i32,
    pub farm_id: i32,
    pub item_id: i32,
    pub delta: f64,
    pub reason: String,
    pub recorded_at: NaiveDateTime,
}

impl InventoryTransaction {
    pub fn from_entity(entity: entity::inventory_transaction::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            item_id: entity.item_id,
            delta: entity.delta,
            reason: entity.reason,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> InventoryTransactionDto {
        InventoryTransactionDto {
            id: self.id,
            item_id: self.item_id,
            delta: self.delta,
            reason: self.reason,
            recorded_at: self.recorded_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedInventoryItems {
    pub items: Vec<InventoryItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedInventoryItems {
    pub fn into_dto(self) -> PaginatedInventoryItemsDto {
        PaginatedInventoryItemsDto {
            items: self.items.into_iter().map(InventoryItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
