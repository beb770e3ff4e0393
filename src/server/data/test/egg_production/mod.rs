use crate::server::{
    data::egg_production::EggProductionRepository,
    model::egg_production::UpsertEggProductionParam,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod totals_for_flock;

fn record_param(flock_id: i32, day: u32, collected: i32) -> UpsertEggProductionParam {
    UpsertEggProductionParam {
        flock_id,
        record_date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
        eggs_collected: collected,
        eggs_damaged: 2,
        notes: None,
    }
}
