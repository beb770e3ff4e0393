use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct EggProductionDto {
    pub id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub eggs_collected: i32,
    pub eggs_damaged: i32,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertEggProductionDto {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub eggs_collected: i32,
    pub eggs_damaged: i32,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedEggProductionDto {
    pub records: Vec<EggProductionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
