use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::customer::{Customer, UpsertCustomerParam};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        param: UpsertCustomerParam,
    ) -> Result<Customer, DbErr> {
        let entity = entity::prelude::Customer::insert(entity::customer::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            email: ActiveValue::Set(param.email),
            address: ActiveValue::Set(param.address),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Referential check used before attaching a customer to a sale.
    pub async fn exists(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::FarmId.eq(farm_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Customer>, u64), DbErr> {
        let paginator = entity::prelude::Customer::find()
            .filter(entity::customer::Column::FarmId.eq(farm_id))
            .order_by_asc(entity::customer::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Customer::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertCustomerParam,
    ) -> Result<Option<Customer>, DbErr> {
        let Some(existing) = entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.phone = ActiveValue::Set(param.phone);
        active.email = ActiveValue::Set(param.email);
        active.address = ActiveValue::Set(param.address);

        let entity = entity::prelude::Customer::update(active).exec(self.db).await?;

        Ok(Some(Customer::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_many()
            .filter(entity::customer::Column::Id.eq(id))
            .filter(entity::customer::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
