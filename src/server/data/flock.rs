use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::flock::{CreateFlockParam, Flock, UpdateFlockParam, FLOCK_STATUS_ACTIVE};

pub struct FlockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlockRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateFlockParam) -> Result<Flock, DbErr> {
        let entity = entity::prelude::Flock::insert(entity::flock::ActiveModel {
            farm_id: ActiveValue::Set(param.farm_id),
            name: ActiveValue::Set(param.name),
            breed: ActiveValue::Set(param.breed),
            batch_code: ActiveValue::Set(param.batch_code),
            bird_count: ActiveValue::Set(param.bird_count),
            acquired_at: ActiveValue::Set(param.acquired_at),
            status: ActiveValue::Set(FLOCK_STATUS_ACTIVE.to_string()),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Flock::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<Flock>, DbErr> {
        let entity = entity::prelude::Flock::find_by_id(id)
            .filter(entity::flock::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Flock::from_entity))
    }

    /// Checks that a flock exists within the given farm. Used by services to
    /// validate foreign-key references before inserting child records.
    pub async fn exists(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Flock::find_by_id(id)
            .filter(entity::flock::Column::FarmId.eq(farm_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Flock>, u64), DbErr> {
        let paginator = entity::prelude::Flock::find()
            .filter(entity::flock::Column::FarmId.eq(farm_id))
            .order_by_desc(entity::flock::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Flock::from_entity).collect(), total))
    }

    /// Full update of mutable fields. Returns `Ok(None)` when the flock does
    /// not exist in the given farm.
    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpdateFlockParam,
    ) -> Result<Option<Flock>, DbErr> {
        let Some(existing) = entity::prelude::Flock::find_by_id(id)
            .filter(entity::flock::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.breed = ActiveValue::Set(param.breed);
        active.batch_code = ActiveValue::Set(param.batch_code);
        active.bird_count = ActiveValue::Set(param.bird_count);
        active.acquired_at = ActiveValue::Set(param.acquired_at);
        active.status = ActiveValue::Set(param.status);
        active.notes = ActiveValue::Set(param.notes);

        let entity = entity::prelude::Flock::update(active).exec(self.db).await?;

        Ok(Some(Flock::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flock::delete_many()
            .filter(entity::flock::Column::Id.eq(id))
            .filter(entity::flock::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
