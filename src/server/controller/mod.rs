//! HTTP request handlers.
//!
//! Controllers check access through the auth guard, convert DTOs into
//! operation params, call the matching service, and convert domain models
//! back into DTOs. No business rules live here.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod admin;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod chat;
pub mod customer;
pub mod egg_production;
pub mod expense;
pub mod feed_usage;
pub mod flock;
pub mod house;
pub mod inventory;
pub mod production_record;
pub mod sale;

/// Query parameters shared by all paginated list endpoints.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Entries per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Pagination plus an optional flock filter, for record lists that hang off
/// a flock.
#[derive(Deserialize, IntoParams)]
pub struct FlockFilterParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Entries per page.
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Restrict results to one flock.
    pub flock_id: Option<i32>,
}
