use sea_orm::DatabaseConnection;

use crate::server::{
    data::inventory::{ApplyTransactionOutcome, InventoryRepository},
    error::AppError,
    model::inventory::{
        InventoryItem, InventoryTransaction, PaginatedInventoryItems, UpsertInventoryItemParam,
    },
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "inventory_item";

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_item(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertInventoryItemParam,
    ) -> Result<InventoryItem, AppError> {
        self.validate_item_fields(&param)?;
        if param.quantity < 0.0 || param.reorder_level < 0.0 {
            return Err(AppError::BadRequest(
                "Quantity and reorder level cannot be negative".to_string(),
            ));
        }

        let item = InventoryRepository::new(self.db)
            .create_item(farm_id, param)
            .await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(item.id),
                Some(item.name.clone()),
            )
            .await?;

        Ok(item)
    }

    fn validate_item_fields(&self, param: &UpsertInventoryItemParam) -> Result<(), AppError> {
        super::require_non_empty("Item name", &param.name)?;
        super::require_non_empty("Item category", &param.category)?;
        super::require_non_empty("Item unit", &param.unit)?;

        Ok(())
    }

    pub async fn get_item(&self, farm_id: i32, id: i32) -> Result<InventoryItem, AppError> {
        InventoryRepository::new(self.db)
            .find_item_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))
    }

    pub async fn get_items_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedInventoryItems, AppError> {
        let (items, total) = InventoryRepository::new(self.db)
            .get_items_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedInventoryItems {
            items,
            total,
            page,
            per_page,
            total_pages: super::total_pages(total, per_page),
        })
    }

    /// Updates the item's descriptive fields. Stock levels only move through
    /// [`Self::apply_transaction`].
    pub async fn update_item(
        &self,
        farm_id: i32,
        user_id: i32,
        id: i32,
        param: UpsertInventoryItemParam,
    ) -> Result<InventoryItem, AppError> {
        self.validate_item_fields(&param)?;
        if param.reorder_level < 0.0 {
            return Err(AppError::BadRequest(
                "Reorder level cannot be negative".to_string(),
            ));
        }

        let item = InventoryRepository::new(self.db)
            .update_item(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory item not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(item)
    }

    pub async fn delete_item(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = InventoryRepository::new(self.db)
            .delete_item(farm_id, id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Inventory item not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }

    /// Records a stock movement and adjusts the item's quantity atomically.
    ///
    /// A movement that would drive the quantity below zero is rejected with
    /// no change to the item or the movement history.
    pub async fn apply_transaction(
        &self,
        farm_id: i32,
        user_id: i32,
        item_id: i32,
        delta: f64,
        reason: String,
    ) -> Result<(InventoryItem, InventoryTransaction), AppError> {
        let outcome = InventoryRepository::new(self.db)
            .apply_transaction(farm_id, item_id, delta, reason)
            .await?;

        let (item, transaction) = match outcome {
            ApplyTransactionOutcome::Applied { item, transaction } => (item, transaction),
            ApplyTransactionOutcome::ItemNotFound => {
                return Err(AppError::NotFound("Inventory item not found".to_string()))
            }
            ApplyTransactionOutcome::InsufficientStock => {
                return Err(AppError::BadRequest(
                    "Insufficient stock for this movement".to_string(),
                ))
            }
        };

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_UPDATE,
                ENTITY,
                Some(item_id),
                Some(format!("stock {:+}", delta)),
            )
            .await?;

        if item.quantity <= item.reorder_level {
            tracing::warn!(
                "Inventory item {} of farm {} is at or below its reorder level",
                item.id,
                farm_id
            );
        }

        Ok((item, transaction))
    }

    /// Gets the movement history of one item, newest first.
    pub async fn get_transactions(
        &self,
        farm_id: i32,
        item_id: i32,
    ) -> Result<Vec<InventoryTransaction>, AppError> {
        // Missing item is a 404 rather than an empty history.
        self.get_item(farm_id, item_id).await?;

        Ok(InventoryRepository::new(self.db)
            .transactions_for_item(farm_id, item_id)
            .await?)
    }
}
