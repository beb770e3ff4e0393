use super::*;

/// Tests storing a refresh token and finding its holder.
#[tokio::test]
async fn stores_and_finds_refresh_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);
    let expires_at = (Utc::now() + Duration::days(30)).naive_utc();

    repo.set_refresh_token(user.id, Some("token-abc".to_string()), Some(expires_at))
        .await?;

    let holder = repo.find_by_refresh_token("token-abc").await?;
    assert!(holder.is_some());
    assert_eq!(holder.unwrap().id, user.id);

    assert!(repo.find_by_refresh_token("token-xyz").await?.is_none());

    Ok(())
}

/// Tests that clearing the refresh token invalidates the lookup.
///
/// Logout clears both columns; the old token must stop resolving.
#[tokio::test]
async fn clearing_token_invalidates_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);
    let expires_at = (Utc::now() + Duration::days(30)).naive_utc();

    repo.set_refresh_token(user.id, Some("token-abc".to_string()), Some(expires_at))
        .await?;
    repo.set_refresh_token(user.id, None, None).await?;

    assert!(repo.find_by_refresh_token("token-abc").await?.is_none());

    let loaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(loaded.refresh_token.is_none());
    assert!(loaded.refresh_token_expires_at.is_none());

    Ok(())
}

/// Tests rotation: replacing the stored token resolves only the new value.
#[tokio::test]
async fn rotation_replaces_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;
    let user = factory::create_user(db, farm.id).await?;

    let repo = UserRepository::new(db);
    let expires_at = (Utc::now() + Duration::days(30)).naive_utc();

    repo.set_refresh_token(user.id, Some("old-token".to_string()), Some(expires_at))
        .await?;
    repo.set_refresh_token(user.id, Some("new-token".to_string()), Some(expires_at))
        .await?;

    assert!(repo.find_by_refresh_token("old-token").await?.is_none());
    assert!(repo.find_by_refresh_token("new-token").await?.is_some());

    Ok(())
}
