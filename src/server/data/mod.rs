//! Data access layer.
//!
//! One repository per entity. Repositories hold a reference to the shared
//! `DatabaseConnection`, convert entity models into domain models at their
//! boundary, and never leak SeaORM types upward. Every method that touches a
//! tenant-owned table takes the caller's `farm_id` and filters on it, so a
//! row from another farm can neither be read nor modified through this layer.

pub mod audit_log;
pub mod chat;
pub mod customer;
pub mod egg_production;
pub mod expense;
pub mod farm;
pub mod feed_usage;
pub mod flock;
pub mod house;
pub mod inventory;
pub mod production_record;
pub mod sale;
pub mod subscriber;
pub mod user;

#[cfg(test)]
mod test;
