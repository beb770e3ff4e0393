use super::*;

/// Tests paginated listing of a farm's flocks.
///
/// Verifies that the repository returns the requested page and the total
/// count across all pages.
///
/// Expected: Ok with page contents and full total
#[tokio::test]
async fn paginates_flocks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    for _ in 0..5 {
        factory::create_flock(db, farm.id).await?;
    }

    let repo = FlockRepository::new(db);
    let (page_one, total) = repo.get_all_paginated(farm.id, 0, 2).await?;

    assert_eq!(page_one.len(), 2);
    assert_eq!(total, 5);

    let (last_page, _) = repo.get_all_paginated(farm.id, 2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests that the listing only covers the caller's farm.
#[tokio::test]
async fn excludes_other_farms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm_a = factory::create_farm(db).await?;
    let farm_b = factory::create_farm(db).await?;
    factory::create_flock(db, farm_a.id).await?;
    factory::create_flock(db, farm_a.id).await?;
    factory::create_flock(db, farm_b.id).await?;

    let repo = FlockRepository::new(db);
    let (flocks, total) = repo.get_all_paginated(farm_a.id, 0, 10).await?;

    assert_eq!(flocks.len(), 2);
    assert_eq!(total, 2);
    assert!(flocks.iter().all(|f| f.farm_id == farm_a.id));

    Ok(())
}

/// Tests listing for a farm with no flocks.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_for_no_flocks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(entity::prelude::Flock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = FlockRepository::new(db);
    let (flocks, total) = repo.get_all_paginated(farm.id, 0, 10).await?;

    assert!(flocks.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
