use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        egg_production::EggProductionRepository, expense::ExpenseRepository,
        feed_usage::FeedUsageRepository, flock::FlockRepository,
        production_record::ProductionRecordRepository, sale::SaleRepository,
    },
    error::AppError,
    model::flock::{
        CreateFlockParam, Flock, FlockSummary, PaginatedFlocks, UpdateFlockParam, FLOCK_STATUSES,
    },
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "flock";

pub struct FlockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        param: CreateFlockParam,
    ) -> Result<Flock, AppError> {
        super::require_non_empty("Flock name", &param.name)?;
        super::require_non_empty("Breed", &param.breed)?;
        super::require_non_empty("Batch code", &param.batch_code)?;
        if param.bird_count < 0 {
            return Err(AppError::BadRequest(
                "Bird count cannot be negative".to_string(),
            ));
        }

        let flock = FlockRepository::new(self.db).create(param).await?;

        AuditService::new(self.db)
            .record(
                flock.farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(flock.id),
                Some(flock.name.clone()),
            )
            .await?;

        Ok(flock)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<Flock, AppError> {
        FlockRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flock not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedFlocks, AppError> {
        let (flocks, total) = FlockRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedFlocks {
            flocks,
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
        param: UpdateFlockParam,
    ) -> Result<Flock, AppError> {
        super::require_non_empty("Flock name", &param.name)?;
        super::require_non_empty("Breed", &param.breed)?;
        super::require_non_empty("Batch code", &param.batch_code)?;
        if !FLOCK_STATUSES.contains(&param.status.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown flock status '{}'",
                param.status
            )));
        }
        if param.bird_count < 0 {
            return Err(AppError::BadRequest(
                "Bird count cannot be negative".to_string(),
            ));
        }

        let flock = FlockRepository::new(self.db)
            .update(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Flock not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(flock)
    }

    /// Deletes a flock and, via the schema's cascade rules, its dependent
    /// records.
    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = FlockRepository::new(self.db).delete(farm_id, id).await?;

        if !deleted {
            return Err(AppError::NotFound("Flock not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }

    /// Assembles the lifetime performance summary for one flock.
    ///
    /// Aggregates across egg production, feed usage, expenses, sales, and
    /// production records. Missing data contributes zero rather than an
    /// absent field.
    pub async fn get_summary(&self, farm_id: i32, id: i32) -> Result<FlockSummary, AppError> {
        // Existence check first so a missing flock is a 404, not a zero summary.
        self.get_by_id(farm_id, id).await?;

        let (eggs_collected, eggs_damaged) = EggProductionRepository::new(self.db)
            .totals_for_flock(farm_id, id)
            .await?;
        let (feed_used_kg, feed_cost) = FeedUsageRepository::new(self.db)
            .totals_for_flock(farm_id, id)
            .await?;
        let expense_total = ExpenseRepository::new(self.db)
            .total_for_flock(farm_id, id)
            .await?;
        let sales_revenue = SaleRepository::new(self.db)
            .revenue_for_flock(farm_id, id)
            .await?;
        let mortality = ProductionRecordRepository::new(self.db)
            .mortality_total_for_flock(farm_id, id)
            .await?;

        Ok(FlockSummary {
            flock_id: id,
            eggs_collected,
            eggs_damaged,
            feed_used_kg,
            feed_cost,
            expense_total,
            sales_revenue,
            mortality,
        })
    }
}
