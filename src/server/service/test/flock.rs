use chrono::NaiveDate;
use entity::prelude::AuditLog;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{
        egg_production::EggProductionRepository, expense::ExpenseRepository,
        feed_usage::FeedUsageRepository, production_record::ProductionRecordRepository,
        sale::SaleRepository,
    },
    error::AppError,
    model::{
        egg_production::UpsertEggProductionParam,
        expense::UpsertExpenseParam,
        feed_usage::UpsertFeedUsageParam,
        flock::{CreateFlockParam, UpdateFlockParam},
        production_record::UpsertProductionRecordParam,
        sale::UpsertSaleParam,
    },
    service::{audit::AuditService, flock::FlockService},
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
}

/// Tests the flock summary aggregation across every record type.
///
/// Expected: totals match the inserted rows.
#[tokio::test]
async fn summary_aggregates_all_record_types() {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock) = factory::helpers::create_farm_with_flock(db).await.unwrap();

    EggProductionRepository::new(db)
        .create(
            farm.id,
            UpsertEggProductionParam {
                flock_id: flock.id,
                record_date: day(1),
                eggs_collected: 180,
                eggs_damaged: 3,
                notes: None,
            },
        )
        .await
        .unwrap();
    FeedUsageRepository::new(db)
        .create(
            farm.id,
            UpsertFeedUsageParam {
                flock_id: flock.id,
                record_date: day(1),
                feed_type: "layer mash".to_string(),
                quantity_kg: 12.5,
                cost: 30.0,
            },
        )
        .await
        .unwrap();
    ExpenseRepository::new(db)
        .create(
            farm.id,
            UpsertExpenseParam {
                flock_id: Some(flock.id),
                category: "medication".to_string(),
                description: "Vaccination".to_string(),
                amount: 45.0,
                expense_date: day(2),
            },
        )
        .await
        .unwrap();
    SaleRepository::new(db)
        .create(
            farm.id,
            UpsertSaleParam {
                customer_id: None,
                flock_id: Some(flock.id),
                product: "eggs".to_string(),
                quantity: 30.0,
                unit_price: 0.5,
                sale_date: day(3),
            },
            15.0,
        )
        .await
        .unwrap();
    ProductionRecordRepository::new(db)
        .create(
            farm.id,
            UpsertProductionRecordParam {
                flock_id: flock.id,
                record_date: day(3),
                mortality: 4,
                average_weight_kg: 1.8,
                notes: None,
            },
        )
        .await
        .unwrap();

    let summary = FlockService::new(db)
        .get_summary(farm.id, flock.id)
        .await
        .unwrap();

    assert_eq!(summary.flock_id, flock.id);
    assert_eq!(summary.eggs_collected, 180);
    assert_eq!(summary.eggs_damaged, 3);
    assert_eq!(summary.feed_used_kg, 12.5);
    assert_eq!(summary.feed_cost, 30.0);
    assert_eq!(summary.expense_total, 45.0);
    assert_eq!(summary.sales_revenue, 15.0);
    assert_eq!(summary.mortality, 4);
}

/// Tests that the summary of a missing flock is a not-found error rather
/// than an all-zero summary.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn summary_of_missing_flock_is_not_found() {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let result = FlockService::new(db).get_summary(farm.id, 42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests that creating a flock through the service writes an audit entry.
///
/// Expected: one entry with action "create" and entity "flock".
#[tokio::test]
async fn create_writes_audit_entry() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let flock = FlockService::new(db)
        .create(
            owner.id,
            CreateFlockParam {
                farm_id: farm.id,
                name: "Layer Batch A".to_string(),
                breed: "Isa Brown".to_string(),
                batch_code: "LBA-1".to_string(),
                bird_count: 250,
                acquired_at: day(1),
                notes: None,
            },
        )
        .await
        .unwrap();

    let trail = AuditService::new(db)
        .get_paginated(farm.id, 0, 10)
        .await
        .unwrap();

    assert_eq!(trail.total, 1);
    assert_eq!(trail.entries[0].action, "create");
    assert_eq!(trail.entries[0].entity, "flock");
    assert_eq!(trail.entries[0].entity_id, Some(flock.id));
    assert_eq!(trail.entries[0].user_id, owner.id);
}

/// Tests that an update with an unrecognized status is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn update_rejects_unknown_status() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner, flock) = factory::helpers::create_farm_with_flock(db).await.unwrap();

    let result = FlockService::new(db)
        .update(
            farm.id,
            owner.id,
            flock.id,
            UpdateFlockParam {
                name: flock.name.clone(),
                breed: flock.breed.clone(),
                batch_code: flock.batch_code.clone(),
                bird_count: flock.bird_count,
                acquired_at: flock.acquired_at,
                status: "hibernating".to_string(),
                notes: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
