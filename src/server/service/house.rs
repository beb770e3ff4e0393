use sea_orm::DatabaseConnection;

use crate::server::{
    data::house::HouseRepository,
    error::AppError,
    model::house::{House, PaginatedHouses, UpsertHouseParam},
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "house";

pub struct HouseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HouseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertHouseParam,
    ) -> Result<House, AppError> {
        super::require_non_empty("House name", &param.name)?;
        if param.capacity <= 0 {
            return Err(AppError::BadRequest(
                "House capacity must be positive".to_string(),
            ));
        }

        let house = HouseRepository::new(self.db).create(farm_id, param).await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(house.id),
                Some(house.name.clone()),
            )
            .await?;

        Ok(house)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<House, AppError> {
        HouseRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("House not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedHouses, AppError> {
        let (houses, total) = HouseRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedHouses {
            houses,
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
        param: UpsertHouseParam,
    ) -> Result<House, AppError> {
        super::require_non_empty("House name", &param.name)?;
        if param.capacity <= 0 {
            return Err(AppError::BadRequest(
                "House capacity must be positive".to_string(),
            ));
        }

        let house = HouseRepository::new(self.db)
            .update(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("House not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(house)
    }

    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = HouseRepository::new(self.db).delete(farm_id, id).await?;

        if !deleted {
            return Err(AppError::NotFound("House not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }
}
