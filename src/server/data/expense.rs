use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::expense::{Expense, UpsertExpenseParam};

pub struct ExpenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, farm_id: i32, param: UpsertExpenseParam) -> Result<Expense, DbErr> {
        let entity = entity::prelude::Expense::insert(entity::expense::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            flock_id: ActiveValue::Set(param.flock_id),
            category: ActiveValue::Set(param.category),
            description: ActiveValue::Set(param.description),
            amount: ActiveValue::Set(param.amount),
            expense_date: ActiveValue::Set(param.expense_date),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Expense::from_entity(entity))
    }

    pub async fn find_by_id(&self, farm_id: i32, id: i32) -> Result<Option<Expense>, DbErr> {
        let entity = entity::prelude::Expense::find_by_id(id)
            .filter(entity::expense::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Expense::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Expense>, u64), DbErr> {
        let paginator = entity::prelude::Expense::find()
            .filter(entity::expense::Column::FarmId.eq(farm_id))
            .order_by_desc(entity::expense::Column::ExpenseDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Expense::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        farm_id: i32,
        id: i32,
        param: UpsertExpenseParam,
    ) -> Result<Option<Expense>, DbErr> {
        let Some(existing) = entity::prelude::Expense::find_by_id(id)
            .filter(entity::expense::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.flock_id = ActiveValue::Set(param.flock_id);
        active.category = ActiveValue::Set(param.category);
        active.description = ActiveValue::Set(param.description);
        active.amount = ActiveValue::Set(param.amount);
        active.expense_date = ActiveValue::Set(param.expense_date);

        let entity = entity::prelude::Expense::update(active).exec(self.db).await?;

        Ok(Some(Expense::from_entity(entity)))
    }

    pub async fn delete(&self, farm_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Expense::delete_many()
            .filter(entity::expense::Column::Id.eq(id))
            .filter(entity::expense::Column::FarmId.eq(farm_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn total_for_flock(&self, farm_id: i32, flock_id: i32) -> Result<f64, DbErr> {
        let row: Option<Option<f64>> = entity::prelude::Expense::find()
            .select_only()
            .column_as(entity::expense::Column::Amount.sum(), "total")
            .filter(entity::expense::Column::FarmId.eq(farm_id))
            .filter(entity::expense::Column::FlockId.eq(flock_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(row.flatten().unwrap_or(0.0))
    }
}
