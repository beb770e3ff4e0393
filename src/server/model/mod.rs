//! Domain models and operation parameter types.
//!
//! Each submodule owns the domain representation of one entity plus the
//! parameter structs its repository operations accept. Entity models convert
//! into domain models at the data-layer boundary (`from_entity`), and domain
//! models convert into DTOs at the controller boundary (`into_dto`).

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
pub mod user;
