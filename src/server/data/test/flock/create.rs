use super::*;

/// Tests creating a new flock.
///
/// Verifies that the repository creates a flock with the supplied fields,
/// starts it in the active status, and stamps a creation time.
///
/// Expected: Ok with flock created
#[tokio::test]
async fn creates_flock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = FlockRepository::new(db);
    let flock = repo.create(create_param(farm.id)).await?;

    assert_eq!(flock.farm_id, farm.id);
    assert_eq!(flock.name, "Layer Batch A");
    assert_eq!(flock.breed, "Isa Brown");
    assert_eq!(flock.bird_count, 250);
    assert_eq!(flock.status, FLOCK_STATUS_ACTIVE);

    Ok(())
}

/// Tests foreign key constraint on farm_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlockRepository::new(db);
    let result = repo.create(create_param(999999)).await;

    assert!(result.is_err());

    Ok(())
}
