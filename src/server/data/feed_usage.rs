use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::feed_usage::{FeedUsage, UpsertFeedUsageParam};

pub struct FeedUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedUsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        param: UpsertFeedUsageParam,
    ) -> Result<FeedUsage, DbErr> {
        let entity = entity::prelude::FeedUsage::insert(entity::feed_usage::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            flock_id: ActiveValue::Set(param.flock_id),
            record_date: ActiveValue::Set(param.record_date),
            feed_type: ActiveValue::Set(param.feed_type),
            quantity_kg: ActiveValue::Set(param.quantity_kg),
            cost: ActiveValue::Set(param.cost),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(FeedUsage::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<FeedUsage>, DbErr> {
        let entity = entity::prelude::FeedUsage::find_by_id(id)
            .filter(entity::feed_usage::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(FeedUsage::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        flock_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<FeedUsage>, u64), DbErr> {
        let mut query = entity::prelude::FeedUsage::find()
            .filter(entity::feed_usage::Column::FarmId.eq(farm_id));

        if let Some(flock_id) = flock_id {
            query = query.filter(entity::feed_usage::Column::FlockId.eq(flock_id));
        }

        let paginator = query
            .order_by_desc(entity::feed_usage::Column::RecordDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(FeedUsage::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertFeedUsageParam,
    ) -> Result<Option<FeedUsage>, DbErr> {
        let Some(existing) = entity::prelude::FeedUsage::find_by_id(id)
            .filter(entity::feed_usage::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.flock_id = ActiveValue::Set(param.flock_id);
        active.record_date = ActiveValue::Set(param.record_date);
        active.feed_type = ActiveValue::Set(param.feed_type);
        active.quantity_kg = ActiveValue::Set(param.quantity_kg);
        active.cost = ActiveValue::Set(param.cost);

        let entity = entity::prelude::FeedUsage::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(FeedUsage::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FeedUsage::delete_many()
            .filter(entity::feed_usage::Column::Id.eq(id))
            .filter(entity::feed_usage::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lifetime feed totals for one flock: (kilograms, cost).
    pub async fn totals_for_flock(&self, farm_id: i32, flock_id: i32) -> Result<(f64, f64), DbErr> {
        let row: Option<(Option<f64>, Option<f64>)> = entity::prelude::FeedUsage::find()
            .select_only()
            .column_as(entity::feed_usage::Column::QuantityKg.sum(), "kilograms")
            .column_as(entity::feed_usage::Column::Cost.sum(), "cost")
            .filter(entity::feed_usage::Column::FarmId.eq(farm_id))
            .filter(entity::feed_usage::Column::FlockId.eq(flock_id))
            .into_tuple()
            .one(self.db)
            .await?;

        let (kilograms, cost) = row.unwrap_or((None, None));
        Ok((kilograms.unwrap_or(0.0), cost.unwrap_or(0.0)))
    }
}
