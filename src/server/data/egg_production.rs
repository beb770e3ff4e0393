use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::egg_production::{EggProduction, UpsertEggProductionParam};

pub struct EggProductionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EggProductionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        param: UpsertEggProductionParam,
    ) -> Result<EggProduction, DbErr> {
        let entity =
            entity::prelude::EggProduction::insert(entity::egg_production::ActiveModel {
                farm_id: ActiveValue::Set(farm_id),
                flock_id: ActiveValue::Set(param.flock_id),
                record_date: ActiveValue::Set(param.record_date),
                eggs_collected: ActiveValue::Set(param.eggs_collected),
                eggs_damaged: ActiveValue::Set(param.eggs_damaged),
                notes: ActiveValue::Set(param.notes),
                ..Default::default()
            })
            .exec_with_returning(self.db)
            .await?;

        Ok(EggProduction::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<EggProduction>, DbErr> {
        let entity = entity::prelude::EggProduction::find_by_id(id)
            .filter(entity::egg_production::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(EggProduction::from_entity))
    }

    /// Paginated listing, newest record date first, optionally narrowed to
    /// one flock.
    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        flock_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<EggProduction>, u64), DbErr> {
        let mut query = entity::prelude::EggProduction::find()
            .filter(entity::egg_production::Column::FarmId.eq(farm_id));

        if let Some(flock_id) = flock_id {
            query = query.filter(entity::egg_production::Column::FlockId.eq(flock_id));
        }

        let paginator = query
            .order_by_desc(entity::egg_production::Column::RecordDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(EggProduction::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertEggProductionParam,
    ) -> Result<Option<EggProduction>, DbErr> {
        let Some(existing) = entity::prelude::EggProduction::find_by_id(id)
            .filter(entity::egg_production::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.flock_id = ActiveValue::Set(param.flock_id);
        active.record_date = ActiveValue::Set(param.record_date);
        active.eggs_collected = ActiveValue::Set(param.eggs_collected);
        active.eggs_damaged = ActiveValue::Set(param.eggs_damaged);
        active.notes = ActiveValue::Set(param.notes);

        let entity = entity::prelude::EggProduction::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(EggProduction::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EggProduction::delete_many()
            .filter(entity::egg_production::Column::Id.eq(id))
            .filter(entity::egg_production::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lifetime egg totals for one flock: (collected, damaged).
    pub async fn totals_for_flock(&self, farm_id: i32, flock_id: i32) -> Result<(i64, i64), DbErr> {
        let row: Option<(Option<i64>, Option<i64>)> = entity::prelude::EggProduction::find()
            .select_only()
            .column_as(entity::egg_production::Column::EggsCollected.sum(), "collected")
            .column_as(entity::egg_production::Column::EggsDamaged.sum(), "damaged")
            .filter(entity::egg_production::Column::FarmId.eq(farm_id))
            .filter(entity::egg_production::Column::FlockId.eq(flock_id))
            .into_tuple()
            .one(self.db)
            .await?;

        let (collected, damaged) = row.unwrap_or((None, None));
        Ok((collected.unwrap_or(0), damaged.unwrap_or(0)))
    }
}
