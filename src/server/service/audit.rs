use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    model::audit::{PaginatedAuditLogs, RecordAuditParam},
};

/// Actions recorded in the audit trail.
pub const AUDIT_CREATE: &str = "create";
pub const AUDIT_UPDATE: &str = "update";
pub const AUDIT_DELETE: &str = "delete";

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the farm's audit trail.
    ///
    /// Called by every mutating service method after the mutation succeeds.
    pub async fn record(
        &self,
        farm_id: i32,
        user_id: i32,
        action: &str,
        entity: &str,
        entity_id: Option<i32>,
        detail: Option<String>,
    ) -> Result<(), AppError> {
        AuditLogRepository::new(self.db)
            .record(RecordAuditParam {
                farm_id,
                user_id,
                action: action.to_string(),
                entity: entity.to_string(),
                entity_id,
                detail,
            })
            .await?;

        Ok(())
    }

    /// Gets the farm's audit trail, newest first.
    pub async fn get_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuditLogs, AppError> {
        let (entries, total) = AuditLogRepository::new(self.db)
            .get_all_paginated(farm_id, page, per_page)
            .await?;

        Ok(PaginatedAuditLogs {
            entries,
            total,
            page,
            per_page,
            total_pages: super::total_pages(total, per_page),
        })
    }
}
