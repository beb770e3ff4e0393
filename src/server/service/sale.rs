use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, flock::FlockRepository, sale::SaleRepository},
    error::AppError,
    model::sale::{PaginatedSales, Sale, UpsertSaleParam},
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "sale";

pub struct SaleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks quantities and that any referenced customer or flock belongs
    /// to the same farm.
    async fn validate(&self, farm_id: i32, param: &UpsertSaleParam) -> Result<(), AppError> {
        super::require_non_empty("Product", &param.product)?;
        if param.quantity < 0.0 || param.unit_price < 0.0 {
            return Err(AppError::BadRequest(
                "Quantity and unit price cannot be negative".to_string(),
            ));
        }
        if let Some(customer_id) = param.customer_id {
            if !CustomerRepository::new(self.db)
                .exists(farm_id, customer_id)
                .await?
            {
                return Err(AppError::NotFound("Customer not found".to_string()));
            }
        }
        if let Some(flock_id) = param.flock_id {
            if !FlockRepository::new(self.db).exists(farm_id, flock_id).await? {
                return Err(AppError::NotFound("Flock not found".to_string()));
            }
        }

        Ok(())
    }

    pub async fn create(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertSaleParam,
    ) -> Result<Sale, AppError> {
        self.validate(farm_id, &param).await?;

        // The stored total is always derived here, never taken from the client.
        let total = param.quantity * param.unit_price;
        let sale = SaleRepository::new(self.db)
            .create(farm_id, param, total)
            .await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(sale.id),
                Some(sale.product.clone()),
            )
            .await?;

        Ok(sale)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<Sale, AppError> {
        SaleRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSales, AppError> {
        let (sales, total) = SaleRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedSales {
            sales,
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
        param: UpsertSaleParam,
    ) -> Result<Sale, AppError> {
        self.validate(farm_id, &param).await?;

        let total = param.quantity * param.unit_price;
        let sale = SaleRepository::new(self.db)
            .update(farm_id, id, param, total)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(sale)
    }

    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = SaleRepository::new(self.db).delete(farm_id, id).await?;

        if !deleted {
            return Err(AppError::NotFound("Sale not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }
}
