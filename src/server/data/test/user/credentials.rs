use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let stored = factory::user::UserFactory::new(db, farm.id)
        .email("worker@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("worker@example.com").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, stored.id);

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the email existence check used during registration.
#[tokio::test]
async fn reports_email_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    factory::user::UserFactory::new(db, farm.id)
        .email("worker@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("worker@example.com").await?);
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}

/// Tests storing and clearing the pending OTP challenge.
#[tokio::test]
async fn sets_and_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);
    let expires_at = (Utc::now() + Duration::minutes(10)).naive_utc();

    repo.set_otp(user.id, Some("hash".to_string()), Some(expires_at))
        .await?;
    let loaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(loaded.otp_code_hash.as_deref(), Some("hash"));
    assert_eq!(loaded.otp_expires_at, Some(expires_at));

    repo.set_otp(user.id, None, None).await?;
    let loaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(loaded.otp_code_hash.is_none());
    assert!(loaded.otp_expires_at.is_none());

    Ok(())
}

/// Tests toggling the email second factor.
#[tokio::test]
async fn toggles_two_factor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);

    repo.set_two_factor(user.id, true).await?;
    assert!(repo.find_by_id(user.id).await?.unwrap().two_factor_enabled);

    repo.set_two_factor(user.id, false).await?;
    assert!(!repo.find_by_id(user.id).await?.unwrap().two_factor_enabled);

    Ok(())
}
