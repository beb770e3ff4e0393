use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub farm_id: i32,
    pub email: String,
    pub display_name: String,
    pub is_staff: bool,
    pub two_factor_enabled: bool,
    pub created_at: NaiveDateTime,
}

/// Request body for an admin creating a staff account on their farm.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateStaffDto {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    pub is_staff: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
