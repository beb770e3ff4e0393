use super::*;

/// Tests finding a flock by id within its farm.
///
/// Expected: Ok(Some) with the stored flock
#[tokio::test]
async fn finds_existing_flock() -> Result<(), DbErr> {
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
    let found = repo.find_by_id(farm.id, stored.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, stored.id);

    Ok(())
}

/// Tests that a flock is invisible from another farm.
///
/// A valid id queried with the wrong farm scope must behave exactly like a
/// missing row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_flock_from_other_farm() -> Result<(), DbErr> {
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
    let found = repo.find_by_id(farm_b.id, stored.id).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests `exists` for present and absent flocks.
#[tokio::test]
async fn reports_existence_within_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let other_farm = factory::create_farm(db).await?;
    let stored = factory::create_flock(db, farm.id).await?;

    let repo = FlockRepository::new(db);

    assert!(repo.exists(farm.id, stored.id).await?);
    assert!(!repo.exists(other_farm.id, stored.id).await?);
    assert!(!repo.exists(farm.id, 999999).await?);

    Ok(())
}
