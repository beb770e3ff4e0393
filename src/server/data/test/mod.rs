mod audit_log;
mod chat;
mod egg_production;
mod flock;
mod inventory;
mod sale;
mod subscriber;
mod user;
