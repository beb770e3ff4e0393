use super::*;

/// Tests promoting and demoting a user's staff flag.
#[tokio::test]
async fn sets_role_within_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);

    assert!(repo.set_role(farm.id, user.id, true).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_staff);

    assert!(repo.set_role(farm.id, user.id, false).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().is_staff);

    Ok(())
}

/// Tests that another farm cannot change the role.
///
/// Expected: Ok(false), flag untouched
#[tokio::test]
async fn rejects_cross_farm_role_change() -> Result<(), DbErr> {
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
    let changed = repo.set_role(farm_b.id, user.id, true).await?;

    assert!(!changed);
    assert!(!repo.find_by_id(user.id).await?.unwrap().is_staff);

    Ok(())
}
