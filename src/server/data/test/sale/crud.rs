use super::*;

/// Tests creating a sale with the service-computed total.
#[tokio::test]
async fn creates_sale_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let customer = factory::create_customer(db, farm.id).await?;

    let repo = SaleRepository::new(db);
    let sale = repo
        .create(farm.id, sale_param(Some(customer.id), None), 15.0)
        .await?;

    assert_eq!(sale.farm_id, farm.id);
    assert_eq!(sale.customer_id, Some(customer.id));
    assert_eq!(sale.total, 15.0);

    Ok(())
}

/// Tests that updating a sale overwrites the stored total.
///
/// The caller recomputes the total from the new quantity and price; a stale
/// total must not survive the update.
#[tokio::test]
async fn update_overwrites_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SaleRepository::new(db);
    let sale = repo.create(farm.id, sale_param(None, None), 15.0).await?;

    let mut param = sale_param(None, None);
    param.quantity = 60.0;
    let updated = repo.update(farm.id, sale.id, param, 30.0).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.quantity, 60.0);
    assert_eq!(updated.total, 30.0);

    Ok(())
}

/// Tests cross-farm isolation for sales.
#[tokio::test]
async fn isolates_sales_between_farms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;

    let repo = SaleRepository::new(db);
    let sale = repo.create(farm_a.id, sale_param(None, None), 15.0).await?;

    assert!(repo.find_by_id(farm_b.id, sale.id).await?.is_none());
    assert!(repo
        .update(farm_b.id, sale.id, sale_param(None, None), 99.0)
        .await?
        .is_none());
    assert!(!repo.delete(farm_b.id, sale.id).await?);

    let (sales, total) = repo.get_all_paginated(farm_a.id, 0, 10).await?;
    assert_eq!(sales.len(), 1);
    assert_eq!(total, 1);

    Ok(())
}
