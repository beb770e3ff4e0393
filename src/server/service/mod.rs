//! Business logic layer.
//!
//! Services sit between controllers and repositories. They validate input,
//! enforce cross-entity rules (flock references, sale totals, stock guards),
//! write audit entries for every mutation, and assemble paginated results.
//! Controllers never touch repositories directly.

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
pub mod mailer;
pub mod production_record;
pub mod sale;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Rejects an empty or whitespace-only value for a required text field.
pub(crate) fn require_non_empty(label: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} cannot be empty", label)));
    }

    Ok(())
}

/// Computes the page count for a paginated result.
pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (total as f64 / per_page as f64).ceil() as u64
    } else {
        0
    }
}
