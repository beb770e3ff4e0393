use super::*;

/// Tests deleting a user of the farm.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(farm.id, user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests that another farm cannot delete the user.
///
/// Expected: Ok(false), row still present
#[tokio::test]
async fn rejects_cross_farm_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm_a.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(farm_b.id, user.id).await?;

    assert!(!deleted);
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}
