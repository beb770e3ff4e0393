use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FlockDto {
    pub id: i32,
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateFlockDto {
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateFlockDto {
    pub name: String,
    pub breed: String,
    pub batch_code: String,
    pub bird_count: i32,
    pub acquired_at: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedFlocksDto {
    pub flocks: Vec<FlockDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Aggregated lifetime totals for a single flock.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FlockSummaryDto {
    pub flock_id: i32,
    pub eggs_collected: i64,
    pub eggs_damaged: i64,
    pub feed_used_kg: f64,
    pub feed_cost: f64,
    pub expense_total: f64,
    pub sales_revenue: f64,
    pub mortality: i64,
}
