use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SaleDto {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub flock_id: Option<i32>,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Always recomputed server-side as quantity * unit_price.
    pub total: f64,
    pub sale_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertSaleDto {
    pub customer_id: Option<i32>,
    pub flock_id: Option<i32>,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub sale_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedSalesDto {
    pub sales: Vec<SaleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
