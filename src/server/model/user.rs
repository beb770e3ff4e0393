//! User domain models and parameters.
//!
//! Application users carry their farm scope and role flag; the OTP and
//! refresh-token columns never leave the server boundary, so the domain model
//! keeps them while `into_dto` drops them.

use chrono::NaiveDateTime;

use crate::model::user::{PaginatedUsersDto, UserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub farm_id: i32,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    /// Staff accounts cannot administer users or billing.
    pub is_staff: bool,
    pub two_factor_enabled: bool,
    pub otp_code_hash: Option<String>,
    pub otp_expires_at: Option<NaiveDateTime>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            email: entity.email,
            password_hash: entity.password_hash,
            display_name: entity.display_name,
            is_staff: entity.is_staff,
            two_factor_enabled: entity.two_factor_enabled,
            otp_code_hash: entity.otp_code_hash,
            otp_expires_at: entity.otp_expires_at,
            refresh_token: entity.refresh_token,
            refresh_token_expires_at: entity.refresh_token_expires_at,
            created_at: entity.created_at,
        }
    }

    /// Converts to the API DTO, dropping credential material.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            farm_id: self.farm_id,
            email: self.email,
            display_name: self.display_name,
            is_staff: self.is_staff,
            two_factor_enabled: self.two_factor_enabled,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a user row.
///
/// Used both for farm-owner registration (is_staff = false) and for admin
/// staff creation (is_staff = true). The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub farm_id: i32,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_staff: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
