use super::*;

fn update_param() -> UpdateFlockParam {
    UpdateFlockParam {
        name: "Layer Batch A (moved)".to_string(),
        breed: "Isa Brown".to_string(),
        batch_code: "LBA-1".to_string(),
        bird_count: 240,
        acquired_at: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        status: "sold".to_string(),
        notes: Some("sold to market".to_string()),
    }
}

/// Tests updating a flock's mutable fields.
///
/// Expected: Ok(Some) with the updated values persisted
#[tokio::test]
async fn updates_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let stored = factory::create_flock(db, farm.id).await?;

    let repo = FlockRepository::new(db);
    let updated = repo.update(farm.id, stored.id, update_param()).await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Layer Batch A (moved)");
    assert_eq!(updated.bird_count, 240);
    assert_eq!(updated.status, "sold");

    let reloaded = repo.find_by_id(farm.id, stored.id).await?.unwrap();
    assert_eq!(reloaded.status, "sold");

    Ok(())
}

/// Tests updating a nonexistent flock.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = FlockRepository::new(db);
    let updated = repo.update(farm.id, 999999, update_param()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that another farm cannot update the flock.
///
/// Expected: Ok(None), original row untouched
#[tokio::test]
async fn rejects_cross_farm_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    let stored = factory::create_flock(db, farm_a.id).await?;

    let repo = FlockRepository::new(db);
    let updated = repo.update(farm_b.id, stored.id, update_param()).await?;

    assert!(updated.is_none());

    let reloaded = repo.find_by_id(farm_a.id, stored.id).await?.unwrap();
    assert_eq!(reloaded.name, stored.name);

    Ok(())
}
