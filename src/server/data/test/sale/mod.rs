use crate::server::{data::sale::SaleRepository, model::sale::UpsertSaleParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod revenue_for_flock;

fn sale_param(customer_id: Option<i32>, flock_id: Option<i32>) -> UpsertSaleParam {
    UpsertSaleParam {
        customer_id,
        flock_id,
        product: "eggs".to_string(),
        quantity: 30.0,
        unit_price: 0.5,
        sale_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
    }
}
