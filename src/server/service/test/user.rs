use entity::prelude::AuditLog;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::user::UserService};

/// Tests staff account creation by an admin.
///
/// Expected: a staff user on the admin's farm.
#[tokio::test]
async fn create_staff_creates_staff_account() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let staff = UserService::new(db)
        .create_staff(
            farm.id,
            admin.id,
            "staff@example.com".to_string(),
            "a-solid-password".to_string(),
            "Staff Member".to_string(),
        )
        .await
        .unwrap();

    assert!(staff.is_staff);
    assert_eq!(staff.farm_id, farm.id);
    assert_ne!(staff.password_hash, "a-solid-password");
}

/// Tests that staff creation refuses an email already in use.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn create_staff_rejects_duplicate_email() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let result = UserService::new(db)
        .create_staff(
            farm.id,
            admin.id,
            admin.email.clone(),
            "a-solid-password".to_string(),
            "Duplicate".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests promoting a staff account to admin.
///
/// Expected: is_staff flips to false.
#[tokio::test]
async fn set_role_promotes_staff() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let staff = factory::user::create_staff_user(db, farm.id).await.unwrap();

    let updated = UserService::new(db)
        .set_role(farm.id, admin.id, staff.id, false)
        .await
        .unwrap();

    assert!(!updated.is_staff);
}

/// Tests that an admin cannot change their own role.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn set_role_rejects_self_change() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let result = UserService::new(db)
        .set_role(farm.id, admin.id, admin.id, true)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that an admin cannot delete their own account.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn delete_rejects_self() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let result = UserService::new(db).delete(farm.id, admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that role changes and deletes are scoped to the admin's farm.
///
/// Expected: Err(NotFound) for a user of another farm.
#[tokio::test]
async fn cross_farm_administration_is_not_found() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let (_other_farm, outsider) = factory::helpers::create_farm_with_owner(db).await.unwrap();

    let service = UserService::new(db);

    let role = service.set_role(farm.id, admin.id, outsider.id, true).await;
    assert!(matches!(role, Err(AppError::NotFound(_))));

    let delete = service.delete(farm.id, admin.id, outsider.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));
}
