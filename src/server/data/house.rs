use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::house::{House, UpsertHouseParam};

pub struct HouseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, farm_id: i32, param: UpsertHouseParam) -> Result<House, DbErr> {
        let entity = entity::prelude::House::insert(entity::house::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            name: ActiveValue::Set(param.name),
            capacity: ActiveValue::Set(param.capacity),
            location: ActiveValue::Set(param.location),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(House::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<House>, DbErr> {
        let entity = entity::prelude::House::find_by_id(id)
            .filter(entity::house::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(House::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<House>, u64), DbErr> {
        let paginator = entity::prelude::House::find()
            .filter(entity::house::Column::FarmId.eq(farm_id))
            .order_by_asc(entity::house::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(House::from_entity).collect(), total))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertHouseParam,
    ) -> Result<Option<House>, DbErr> {
        let Some(existing) = entity::prelude::House::find_by_id(id)
            .filter(entity::house::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.capacity = ActiveValue::Set(param.capacity);
        active.location = ActiveValue::Set(param.location);

        let entity = entity::prelude::House::update(active).exec(self.db).await?;

        Ok(Some(House::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::House::delete_many()
            .filter(entity::house::Column::Id.eq(id))
            .filter(entity::house::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
