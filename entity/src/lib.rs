//! SeaORM entity models for the farmboard database schema.

pub mod prelude;

pub mod audit_log;
pub mod chat_message;
pub mod chat_participant;
pub mod chat_thread;
pub mod customer;
pub mod egg_production;
pub mod expense;
pub mod farm;
pub mod feed_usage;
pub mod flock;
pub mod house;
pub mod inventory_item;
pub mod inventory_transaction;
pub mod production_record;
pub mod sale;
pub mod subscriber;
pub mod user;
