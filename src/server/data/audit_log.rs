use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::audit::{AuditLog, RecordAuditParam};

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit entry. Audit rows are never updated or deleted
    /// through the API.
    pub async fn record(&self, param: RecordAuditParam) -> Result<AuditLog, DbErr> {
        let entity = entity::prelude::AuditLog::insert(entity::audit_log::ActiveModel {
            farm_id: ActiveValue::Set(param.farm_id),
            user_id: ActiveValue::Set(param.user_id),
            action: ActiveValue::Set(param.action),
            entity: ActiveValue::Set(param.entity),
            entity_id: ActiveValue::Set(param.entity_id),
            detail: ActiveValue::Set(param.detail),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(AuditLog::from_entity(entity))
    }

    pub async fn get_all_paginated(
        &self,
        farm_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AuditLog>, u64), DbErr> {
        let paginator = entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::FarmId.eq(farm_id))
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(AuditLog::from_entity).collect(),
            total,
        ))
    }
}
