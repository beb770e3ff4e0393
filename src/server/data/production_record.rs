use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::production_record::{ProductionRecord, UpsertProductionRecordParam};

pub struct ProductionRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductionRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        param: UpsertProductionRecordParam,
    ) -> Result<ProductionRecord, DbErr> {
        let entity =
            entity::prelude::ProductionRecord::insert(entity::production_record::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                flock_id: ActiveValue::Set(param.flock_id),
                record_date: ActiveValue::Set(param.record_date),
                mortality: ActiveValue::Set(param.mortality),
                average_weight_kg: ActiveValue::Set(param.average_weight_kg),
                notes: ActiveValue::Set(param.notes),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(ProductionRecord::from_entity(entity))
    }

    pub async fn find_by_id(
        &self,
        farm_id: i32,
        id: i32,
    ) -> Result<Option<ProductionRecord>, DbErr> {
        let entity = entity::prelude::ProductionRecord::find_by_id(id)
            .filter(entity::production_record::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ProductionRecord::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        flock_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ProductionRecord>, u64), DbErr> {
        let mut query = entity::prelude::ProductionRecord::find()
            .filter(entity::production_record::Column::FarmId.eq(farm_id));

        if let Some(flock_id) = flock_id {
            query = query.filter(entity::production_record::Column::FlockId.eq(flock_id));
        }

        let paginator = query
            .order_by_desc(entity::production_record::Column::RecordDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities
                .into_iter()
                .map(ProductionRecord::from_entity)
                .collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertProductionRecordParam,
    ) -> Result<Option<ProductionRecord>, DbErr> {
        let Some(existing) = entity::prelude::ProductionRecord::find_by_id(id)
            .filter(entity::production_record::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.flock_id = ActiveValue::Set(param.flock_id);
        active.record_date = ActiveValue::Set(param.record_date);
        active.mortality = ActiveValue::Set(param.mortality);
        active.average_weight_kg = ActiveValue::Set(param.average_weight_kg);
        active.notes = ActiveValue::Set(param.notes);

        let entity = entity::prelude::ProductionRecord::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(ProductionRecord::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProductionRecord::delete_many()
            .filter(entity::production_record::Column::Id.eq(id))
            .filter(entity::production_record::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn mortality_total_for_flock(
        &self,
        farm_id: i32,
        flock_id: i32,
    ) -> Result<i64, DbErr> {
        let row: Option<Option<i64>> = entity::prelude::ProductionRecord::find()
            .select_only()
            .column_as(entity::production_record::Column::Mortality.sum(), "total")
            .filter(entity::production_record::Column::FarmId.eq(farm_id))
            .filter(entity::production_record::Column::FlockId.eq(flock_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(row.flatten().unwrap_or(0))
    }
}
