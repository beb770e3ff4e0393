use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductionRecordDto {
    pub id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub mortality: i32,
    pub average_weight_kg: f64,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertProductionRecordDto {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub mortality: i32,
    pub average_weight_kg: f64,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedProductionRecordsDto {
    pub records: Vec<ProductionRecordDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
