use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FeedUsageDto {
    pub id: i32,
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertFeedUsageDto {
    pub flock_id: i32,
    pub record_date: NaiveDate,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedFeedUsageDto {
    pub records: Vec<FeedUsageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
