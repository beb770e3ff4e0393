use super::*;

/// Tests summing sale totals attributed to a flock.
#[tokio::test]
async fn sums_revenue_for_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let flock = factory::create_flock(db, farm.id).await?;

    let repo = SaleRepository::new(db);
    repo.create(farm.id, sale_param(None, Some(flock.id)), 15.0)
        .await?;
    repo.create(farm.id, sale_param(None, Some(flock.id)), 22.5)
        .await?;
    // Unattributed sale must not count toward the flock.
    repo.create(farm.id, sale_param(None, None), 100.0).await?;

    let revenue = repo.revenue_for_flock(farm.id, flock.id).await?;

    assert_eq!(revenue, 37.5);

    Ok(())
}

/// Tests that a flock with no sales reports zero revenue.
#[tokio::test]
async fn returns_zero_without_sales() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let flock = factory::create_flock(db, farm.id).await?;

    let repo = SaleRepository::new(db);
    let revenue = repo.revenue_for_flock(farm.id, flock.id).await?;

    assert_eq!(revenue, 0.0);

    Ok(())
}
