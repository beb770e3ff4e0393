//! Inventory repository.
//!
//! Stock levels are never written directly by clients. Every adjustment goes
//! through [`InventoryRepository::apply_transaction`], which records the
//! movement and updates the item quantity inside one database transaction.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::inventory::{
    InventoryItem, InventoryTransaction, UpsertInventoryItemParam,
};

/// Outcome of applying a stock movement.
pub enum ApplyTransactionOutcome {
    Applied {
        item: InventoryItem,
        transaction: InventoryTransaction,
    },
    ItemNotFound,
    InsufficientStock,
}

pub struct InventoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_item(
        &self,
        farm_id: i32,
        param: UpsertInventoryItemParam,
    ) -> Result<InventoryItem, DbErr> {
        let entity = entity::prelude::InventoryItem::insert(entity::inventory_item::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            name: ActiveValue::Set(param.name),
            category: ActiveValue::Set(param.category),
            quantity: ActiveValue::Set(param.quantity),
            unit: ActiveValue::Set(param.unit),
            reorder_level: ActiveValue::Set(param.reorder_level),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(InventoryItem::from_entity(entity))
    }

    pub async fn find_item_by_id(
        &self,
        farm_id: i32,
        id: i32,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::InventoryItem::find_by_id(id)
            .filter(entity::inventory_item::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    pub async fn get_items_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<InventoryItem>, u64), DbErr> {
        let paginator = entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::FarmId.eq(farm_id))
            .order_by_asc(entity::inventory_item::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(InventoryItem::from_entity).collect(),
            total,
        ))
    }

    /// Updates item metadata. The stored quantity is preserved; stock only
    /// moves through [`Self::apply_transaction`].
    pub async fn update_item(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertInventoryItemParam,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(existing) = entity::prelude::InventoryItem::find_by_id(id)
            .filter(entity::inventory_item::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.category = ActiveValue::Set(param.category);
        active.unit = ActiveValue::Set(param.unit);
        active.reorder_level = ActiveValue::Set(param.reorder_level);

        let entity = entity::prelude::InventoryItem::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(InventoryItem::from_entity(entity)))
    }

    pub async fn delete_item(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::InventoryItem::delete_many()
            .filter(entity::inventory_item::Column::Id.eq(id))
            .filter(entity::inventory_item::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies a stock movement atomically.
    ///
    /// A negative delta that would push the quantity below zero is rejected
    /// and nothing is written.
    pub async fn apply_transaction(
        &self,
        farm_id: i32,
        item_id: i32,
        delta: f64,
        reason: String,
    ) -> Result<ApplyTransactionOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(item) = entity::prelude::InventoryItem::find_by_id(item_id)
            .filter(entity::inventory_item::Column::FarmId.eq(farm_id))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(ApplyTransactionOutcome::ItemNotFound);
        };

        let new_quantity = item.quantity + delta;
        if new_quantity < 0.0 {
            txn.rollback().await?;
            return Ok(ApplyTransactionOutcome::InsufficientStock);
        }

        let mut active = item.into_active_model();
        active.quantity = ActiveValue::Set(new_quantity);
        let item = entity::prelude::InventoryItem::update(active)
            .exec(&txn)
            .await?;

        let transaction = entity::prelude::InventoryTransaction::insert(
            entity::inventory_transaction::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                item_id: ActiveValue::Set(item_id),
                delta: ActiveValue::Set(delta),
                reason: ActiveValue::Set(reason),
                recorded_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok(ApplyTransactionOutcome::Applied {
            item: InventoryItem::from_entity(item),
            transaction: InventoryTransaction::from_entity(transaction),
        })
    }

    /// Movement history for one item, newest first.
    pub async fn transactions_for_item(
        &self,
        farm_id: i32,
        item_id: i32,
    ) -> Result<Vec<InventoryTransaction>, DbErr> {
        let entities = entity::prelude::InventoryTransaction::find()
            .filter(entity::inventory_transaction::Column::FarmId.eq(farm_id))
            .filter(entity::inventory_transaction::Column::ItemId.eq(item_id))
            .order_by_desc(entity::inventory_transaction::Column::RecordedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(InventoryTransaction::from_entity)
            .collect())
    }
}
