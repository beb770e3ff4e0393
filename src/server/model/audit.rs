use chrono::NaiveDateTime;

use crate::model::audit::{AuditLogDto, PaginatedAuditLogsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub farm_id: i32,
    pub user_id: i32,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub detail: Option<String>,
    pub created_at: NaiveDateTime,
}

impl AuditLog {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            user_id: entity.user_id,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            detail: entity.detail,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            user_id: self.user_id,
            action: self.action,
            entity: self.entity,
            entity_id: self.entity_id,
            detail: self.detail,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending one audit entry.
#[derive(Debug, Clone)]
pub struct RecordAuditParam {
    pub farm_id: i32,
    pub user_id: i32,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuditLogs {
    pub entries: Vec<AuditLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuditLogs {
    pub fn into_dto(self) -> PaginatedAuditLogsDto {
        PaginatedAuditLogsDto {
            entries: self.entries.into_iter().map(AuditLog::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
