use super::*;

/// Tests paginated listing of a farm's users.
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    for _ in 0..3 {
        factory::create_user(db, farm.id).await?;
    }

    let repo = UserRepository::new(db);
    let (page, total) = repo.get_all_paginated(farm.id, 0, 2).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that listing excludes users from other farms.
#[tokio::test]
async fn excludes_other_farms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    factory::create_user(db, farm_a.id).await?;
    factory::create_user(db, farm_b.id).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(farm_a.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert!(users.iter().all(|u| u.farm_id == farm_a.id));

    Ok(())
}
