use super::*;
use entity::prelude::AuditLog;

/// Tests appending an audit entry.
#[tokio::test]
async fn records_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await?;

    let repo = AuditLogRepository::new(db);
    let entry = repo.record(audit_param(farm.id, owner.id, "create")).await?;

    assert_eq!(entry.farm_id, farm.id);
    assert_eq!(entry.user_id, owner.id);
    assert_eq!(entry.action, "create");
    assert_eq!(entry.entity, "flock");

    Ok(())
}

/// Tests the paginated trail, newest first and scoped to the farm.
#[tokio::test]
async fn paginates_trail_per_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm_a, owner_a) = factory::helpers::create_farm_with_owner(db).await?;
    let (farm_b, owner_b) = factory::helpers::create_farm_with_owner(db).await?;

    let repo = AuditLogRepository::new(db);
    repo.record(audit_param(farm_a.id, owner_a.id, "create")).await?;
    repo.record(audit_param(farm_a.id, owner_a.id, "update")).await?;
    repo.record(audit_param(farm_a.id, owner_a.id, "delete")).await?;
    repo.record(audit_param(farm_b.id, owner_b.id, "create")).await?;

    let (page, total) = repo.get_all_paginated(farm_a.id, 0, 2).await?;

    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);
    assert!(page.iter().all(|e| e.farm_id == farm_a.id));
    assert!(page[0].created_at >= page[1].created_at);

    Ok(())
}
