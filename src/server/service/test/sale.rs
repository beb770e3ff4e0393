use chrono::NaiveDate;
use entity::prelude::AuditLog;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::sale::UpsertSaleParam,
    service::sale::SaleService,
};

fn sale_param(customer_id: Option<i32>, quantity: f64, unit_price: f64) -> UpsertSaleParam {
    UpsertSaleParam {
        customer_id,
        flock_id: None,
        product: "eggs".to_string(),
        quantity,
        unit_price,
        sale_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
    }
}

/// Tests that the stored total is derived from quantity and unit price.
///
/// Expected: total = 30 * 0.5 = 15.0
#[tokio::test]
async fn create_derives_total() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let sale = SaleService::new(db)
        .create(farm.id, owner.id, sale_param(None, 30.0, 0.5))
        .await
        .unwrap();

    assert_eq!(sale.total, 15.0);
}

/// Tests that an update rederives the total from the new values.
///
/// Expected: total follows the updated quantity.
#[tokio::test]
async fn update_rederives_total() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let service = SaleService::new(db);

    let sale = service
        .create(farm.id, owner.id, sale_param(None, 30.0, 0.5))
        .await
        .unwrap();

    let updated = service
        .update(farm.id, owner.id, sale.id, sale_param(None, 60.0, 0.5))
        .await
        .unwrap();

    assert_eq!(updated.total, 30.0);
}

/// Tests that a sale referencing a customer of another farm is refused.
///
/// Expected: Err(NotFound), same as a customer that does not exist.
#[tokio::test]
async fn create_rejects_foreign_customer() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let (other_farm, _) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let foreign_customer = factory::create_customer(db, other_farm.id).await.unwrap();

    let result = SaleService::new(db)
        .create(
            farm.id,
            owner.id,
            sale_param(Some(foreign_customer.id), 30.0, 0.5),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests that negative quantities are refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn create_rejects_negative_quantity() {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let result = SaleService::new(db)
        .create(farm.id, owner.id, sale_param(None, -5.0, 0.5))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
