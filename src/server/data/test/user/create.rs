use super::*;

/// Tests creating a user account.
///
/// Verifies that a new user starts without a second factor, without token
/// columns populated, and with the given role flag.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            farm_id: farm.id,
            email: "owner@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            display_name: "Owner".to_string(),
            is_staff: false,
        })
        .await?;

    assert_eq!(user.farm_id, farm.id);
    assert_eq!(user.email, "owner@example.com");
    assert!(!user.is_staff);
    assert!(!user.two_factor_enabled);
    assert!(user.refresh_token.is_none());
    assert!(user.otp_code_hash.is_none());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        farm_id: farm.id,
        email: "owner@example.com".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        display_name: "Owner".to_string(),
        is_staff: false,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
