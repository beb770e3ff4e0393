use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct HouseDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpsertHouseDto {
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedHousesDto {
    pub houses: Vec<HouseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
