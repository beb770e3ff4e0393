use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AuditLogDto {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub detail: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedAuditLogsDto {
    pub entries: Vec<AuditLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
