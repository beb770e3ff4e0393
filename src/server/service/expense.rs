use sea_orm::DatabaseConnection;

use crate::server::{
    data::{expense::ExpenseRepository, flock::FlockRepository},
    error::AppError,
    model::expense::{Expense, PaginatedExpenses, UpsertExpenseParam},
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "expense";

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Expenses may be farm-level (no flock) or attributed to one flock; an
    /// attributed expense must reference a flock of the same farm.
    async fn validate(&self, farm_id: i32, param: &UpsertExpenseParam) -> Result<(), AppError> {
        super::require_non_empty("Expense category", &param.category)?;
        super::require_non_empty("Expense description", &param.description)?;
        if let Some(flock_id) = param.flock_id {
            if !FlockRepository::new(self.db).exists(farm_id, flock_id).await? {
                return Err(AppError::NotFound("Flock not found".to_string()));
            }
        }
        if param.amount < 0.0 {
            return Err(AppError::BadRequest(
                "Expense amount cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn create(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertExpenseParam,
    ) -> Result<Expense, AppError> {
        self.validate(farm_id, &param).await?;

        let expense = ExpenseRepository::new(self.db).create(farm_id, param).await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(expense.id),
                Some(expense.category.clone()),
            )
            .await?;

        Ok(expense)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<Expense, AppError> {
        ExpenseRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedExpenses, AppError> {
        let (expenses, total) = ExpenseRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedExpenses {
            expenses,
            total,
            page,
            per_page,
            total_pages: super::total_pages(total, per_page),
        })
    }

    pub async fn update(
        &self,
        farm_id: i32,
        user_id: i32,
        id: i32,
        param: UpsertExpenseParam,
    ) -> Result<Expense, AppError> {
        self.validate(farm_id, &param).await?;

        let expense = ExpenseRepository::new(self.db)
            .update(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(expense)
    }

    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = ExpenseRepository::new(self.db).delete(farm_id, id).await?;

        if !deleted {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }
}
