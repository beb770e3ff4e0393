use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::sale::{Sale, UpsertSaleParam};

pub struct SaleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a sale. The stored total is always recomputed from quantity
    /// and unit price by the service layer, never taken from the client.
    pub async fn create(
        &self,
        farm_id: i32,
        param: UpsertSaleParam,
        total: f64,
    ) -> Result<Sale, DbErr> {
        let entity = entity::prelude::Sale::insert(entity::sale::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            customer_id: ActiveValue::Set(param.customer_id),
            flock_id: ActiveValue::Set(param.flock_id),
            product: ActiveValue::Set(param.product),
            quantity: ActiveValue::Set(param.quantity),
            unit_price: ActiveValue::Set(param.unit_price),
            total: ActiveValue::Set(total),
            sale_date: ActiveValue::Set(param.sale_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Sale::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<Sale>, DbErr> {
        let entity = entity::prelude::Sale::find_by_id(id)
            .filter(entity::sale::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Sale::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Sale>, u64), DbErr> {
        let paginator = entity::prelude::Sale::find()
            .filter(entity::sale::Column::FarmId.eq(farm_id))
            .order_by_desc(entity::sale::Column::SaleDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Sale::from_entity).collect(), total))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertSaleParam,
        total: f64,
    ) -> Result<Option<Sale>, DbErr> {
        let Some(existing) = entity::prelude::Sale::find_by_id(id)
            .filter(entity::sale::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.customer_id = ActiveValue::Set(param.customer_id);
        active.flock_id = ActiveValue::Set(param.flock_id);
        active.product = ActiveValue::Set(param.product);
        active.quantity = ActiveValue::Set(param.quantity);
        active.unit_price = ActiveValue::Set(param.unit_price);
        active.total = ActiveValue::Set(total);
        active.sale_date = ActiveValue::Set(param.sale_date);

        let entity = entity::prelude::Sale::update(active).exec(self.db).await?;

        Ok(Some(Sale::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Sale::delete_many()
            .filter(entity::sale::Column::Id.eq(id))
            .filter(entity::sale::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn revenue_for_flock(&self, farm_id: i32, flock_id: i32) -> Result<f64, DbErr> {
        let row: Option<Option<f64>> = entity::prelude::Sale::find()
            .select_only()
            .column_as(entity::sale::Column::Total.sum(), "revenue")
            .filter(entity::sale::Column::FarmId.eq(farm_id))
            .filter(entity::sale::Column::FlockId.eq(flock_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(row.flatten().unwrap_or(0.0))
    }
}
