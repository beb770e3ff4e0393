use crate::server::{
    data::flock::FlockRepository,
    model::flock::{CreateFlockParam, UpdateFlockParam, FLOCK_STATUS_ACTIVE},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod get_by_id;
mod update;

fn create_param(farm_id: i32) -> CreateFlockParam {
    CreateFlockParam {
        farm_id,
        name: "Layer Batch A".to_string(),
        breed: "Isa Brown".to_string(),
        batch_code: "LBA-1".to_string(),
        bird_count: 250,
        acquired_at: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        notes: None,
    }
}
