use super::*;

/// Tests summing collected and damaged eggs for a flock.
#[tokio::test]
async fn sums_collected_and_damaged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock) = factory::helpers::create_farm_with_flock(db).await?;

    let repo = EggProductionRepository::new(db);
    repo.create(farm.id, record_param(flock.id, 1, 180)).await?;
    repo.create(farm.id, record_param(flock.id, 2, 170)).await?;

    let (collected, damaged) = repo.totals_for_flock(farm.id, flock.id).await?;

    assert_eq!(collected, 350);
    assert_eq!(damaged, 4);

    Ok(())
}

/// Tests that a flock with no entries totals to zero.
#[tokio::test]
async fn returns_zero_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_record_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, _owner, flock) = factory::helpers::create_farm_with_flock(db).await?;

    let repo = EggProductionRepository::new(db);
    let (collected, damaged) = repo.totals_for_flock(farm.id, flock.id).await?;

    assert_eq!(collected, 0);
    assert_eq!(damaged, 0);

    Ok(())
}

/// Tests that totals ignore entries belonging to other flocks.
#[tokio::test]
async fn excludes_other_flocks() -> Result<(), DbErr> {
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
    repo.create(farm.id, record_param(flock_b.id, 1, 90)).await?;

    let (collected, _) = repo.totals_for_flock(farm.id, flock_a.id).await?;

    assert_eq!(collected, 180);

    Ok(())
}
