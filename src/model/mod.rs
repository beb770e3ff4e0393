//! Shared API data transfer objects.
//!
//! Every type in this module crosses the HTTP boundary as JSON and is annotated
//! for the OpenAPI document. Conversion to and from domain models happens in
//! `server::model`; these types carry no behavior of their own.

pub mod api;
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
