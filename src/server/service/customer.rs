use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{Customer, PaginatedCustomers, UpsertCustomerParam},
    service::audit::{AuditService, AUDIT_CREATE, AUDIT_DELETE, AUDIT_UPDATE},
};

const ENTITY: &str = "customer";

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        farm_id: i32,
        user_id: i32,
        param: UpsertCustomerParam,
    ) -> Result<Customer, AppError> {
        super::require_non_empty("Customer name", &param.name)?;

        let customer = CustomerRepository::new(self.db)
            .create(farm_id, param)
            .await?;

        AuditService::new(self.db)
            .record(
                farm_id,
                user_id,
                AUDIT_CREATE,
                ENTITY,
                Some(customer.id),
                Some(customer.name.clone()),
            )
            .await?;

        Ok(customer)
    }

    pub async fn get_by_id(&self, farm_id: i32, id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(farm_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedCustomers, AppError> {
        let (customers, total) = CustomerRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedCustomers {
            customers,
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
        param: UpsertCustomerParam,
    ) -> Result<Customer, AppError> {
        super::require_non_empty("Customer name", &param.name)?;

        let customer = CustomerRepository::new(self.db)
            .update(farm_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_UPDATE, ENTITY, Some(id), None)
            .await?;

        Ok(customer)
    }

    /// Deletes a customer. Past sales keep their rows; the schema nulls the
    /// customer reference rather than cascading.
    pub async fn delete(&self, farm_id: i32, user_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = CustomerRepository::new(self.db).delete(farm_id, id).await?;

        if !deleted {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        AuditService::new(self.db)
            .record(farm_id, user_id, AUDIT_DELETE, ENTITY, Some(id), None)
            .await?;

        Ok(())
    }
}
