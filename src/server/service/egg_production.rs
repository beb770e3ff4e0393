use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{egg_production::EggProductionRepository, flock::FlockRepository},
    error::AppError,
    model::egg_production::{EggProduction, PaginatedEggProduction, UpsertEggProductionParam},
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "egg_production";

pub struct EggProductionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EggProductionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the record fields shared by create and update: the flock
    /// must belong to the farm, counts cannot be negative, and the record
    /// date cannot lie in the future.
    async fn validate(&self, farm_id: i32, param: &UpsertEggProductionParam) -> Result<(), AppError> {
        if !FlockRepository::new(self.db)
            .exists(farm_id, param.flock_id)
            .await?
        {
            return Err(AppError::NotFound("Flock not found".to_string()));
        }
        if param.eggs_collected < 0 || param.eggs_damaged < 0 {
            return Err(AppError::BadRequest(
                "Egg counts cannot be negative".to_string(),
            ));
        }
        if param.record_date > Utc::now().date_naive() {
            return Err(AppError::BadRequest(
                "Record date cannot be in the future".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn create(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertEggProductionParam,
    ) -> Result<EggProduction, AppError> {
        self.validate(farm_id, &param).await?;

        let record = EggProductionRepository::new(self.db)
            .create(farm_id, param)
            .await?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_CREATE, ENTITY, Some(record.id), None)
            .await?;

        Ok(record)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<EggProduction, AppError> {
        EggProductionRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Production entry not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        flock_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedEggProduction, AppError> {
        let (records, total) = EggProductionRepository::new(self.db)
            .get_all_paginated(farm_id, flock_id, page, per_page)
            .await?;

        Ok(PaginatedEggProduction {
            records,
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
        param: UpsertEggProductionParam,
    ) -> Result<EggProduction, AppError> {
        self.validate(farm_id, &param).await?;

        let record = EggProductionRepository::new(self.db)
            .update(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Production entry not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(record)
    }

    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = EggProductionRepository::new(self.db)
            .delete(farm_id, id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Production entry not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }
}
