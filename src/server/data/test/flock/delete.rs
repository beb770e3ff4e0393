use super::*;

/// Tests deleting a flock.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn deletes_flock() -> Result<(), DbErr> {
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
    let deleted = repo.delete(farm.id, stored.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(farm.id, stored.id).await?.is_none());

    Ok(())
}

/// Tests deleting a nonexistent flock.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = FlockRepository::new(db);
    let deleted = repo.delete(farm.id, 999999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that another farm cannot delete the flock.
///
/// Expected: Ok(false), row still present
#[tokio::test]
async fn rejects_cross_farm_delete() -> Result<(), DbErr> {
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
    let deleted = repo.delete(farm_b.id, stored.id).await?;

    assert!(!deleted);
    assert!(repo.find_by_id(farm_a.id, stored.id).await?.is_some());

    Ok(())
}
