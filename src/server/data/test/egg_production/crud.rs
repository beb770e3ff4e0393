use super::*;

/// Tests creating and reading back a production entry.
#[tokio::test]
async fn creates_and_finds_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock) = factory::helpers::create_farm_with_flock(db).await?;

    let repo = EggProductionRepository::new(db);
    let record = repo.create(farm.id, record_param(flock.id, 1, 180)).await?;

    assert_eq!(record.farm_id, farm.id);
    assert_eq!(record.eggs_collected, 180);

    let found = repo.find_by_id(farm.id, record.id).await?;
    assert!(found.is_some());

    Ok(())
}

/// Tests updating an entry's counts.
#[tokio::test]
async fn updates_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock) = factory::helpers::create_farm_with_flock(db).await?;

    let repo = EggProductionRepository::new(db);
    let record = repo.create(farm.id, record_param(flock.id, 1, 180)).await?;

    let updated = repo
        .update(farm.id, record.id, record_param(flock.id, 1, 195))
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().eggs_collected, 195);

    Ok(())
}

/// Tests filtering the listing to one flock.
#[tokio::test]
async fn filters_listing_by_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock_a) = factory::helpers::create_farm_with_flock(db).await?;
    let flock_b = factory::create_flock(db, farm.id).await?;

    let repo = EggProductionRepository::new(db);
    repo.create(farm.id, record_param(flock_a.id, 1, 180)).await?;
    repo.create(farm.id, record_param(flock_a.id, 2, 175)).await?;
    repo.create(farm.id, record_param(flock_b.id, 1, 90)).await?;

    let (all, total) = repo.get_all_paginated(farm.id, None, 0, 10).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(total, 3);

    let (only_a, total_a) = repo
        .get_all_paginated(farm.id, Some(flock_a.id), 0, 10)
        .await?;
    assert_eq!(only_a.len(), 2);
    assert_eq!(total_a, 2);
    assert!(only_a.iter().all(|r| r.flock_id == flock_a.id));

    Ok(())
}

/// Tests that an entry is invisible and undeletable from another farm.
#[tokio::test]
async fn isolates_records_between_farms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm_a, _owner, flock) = factory::helpers::create_farm_with_flock(db).await?;
    let farm_b = factory::create_farm(db).await?;

    let repo = EggProductionRepository::new(db);
    let record = repo.create(farm_a.id, record_param(flock.id, 1, 180)).await?;

    assert!(repo.find_by_id(farm_b.id, record.id).await?.is_none());
    assert!(!repo.delete(farm_b.id, record.id).await?);
    assert!(repo.delete(farm_a.id, record.id).await?);

    Ok(())
}
