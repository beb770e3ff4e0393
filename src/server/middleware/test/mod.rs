use axum::http::{header, HeaderMap};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::JwtManager,
};

fn jwt() -> JwtManager {
    JwtManager::new("test-secret", 900)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}

/// Tests that a valid token grants access and yields the user row.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_with_valid_token() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let user = UserRepository::new(db)
        .find_by_id(owner.id)
        .await
        .unwrap()
        .unwrap();
    let token = jwt.issue(&user).unwrap();

    let result = AuthGuard::new(db, &jwt)
        .require(&bearer_headers(&token), &[])
        .await
        .unwrap();

    assert_eq!(result.id, owner.id);
    assert_eq!(result.farm_id, farm.id);
}

/// Tests that a missing Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let result = AuthGuard::new(db, &jwt).require(&HeaderMap::new(), &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a garbage token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let result = AuthGuard::new(db, &jwt)
        .require(&bearer_headers("not-a-jwt"), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let other_jwt = JwtManager::new("other-secret", 900);

    let (_farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let user = UserRepository::new(db)
        .find_by_id(owner.id)
        .await
        .unwrap()
        .unwrap();
    let token = other_jwt.issue(&user).unwrap();

    let result = AuthGuard::new(db, &jwt)
        .require(&bearer_headers(&token), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a token for a user deleted since issuance is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let (farm, owner) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let user_repo = UserRepository::new(db);
    let user = user_repo.find_by_id(owner.id).await.unwrap().unwrap();
    let token = jwt.issue(&user).unwrap();

    user_repo.delete(farm.id, owner.id).await.unwrap();

    let result = AuthGuard::new(db, &jwt)
        .require(&bearer_headers(&token), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));
}

/// Tests that a staff account is denied admin-only operations while an
/// admin passes.
///
/// Expected: Err(AccessDenied) for staff, Ok for the admin.
#[tokio::test]
async fn admin_permission_excludes_staff() {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let (farm, admin) = factory::helpers::create_farm_with_owner(db).await.unwrap();
    let staff = factory::user::create_staff_user(db, farm.id).await.unwrap();

    let user_repo = UserRepository::new(db);
    let admin_token = jwt
        .issue(&user_repo.find_by_id(admin.id).await.unwrap().unwrap())
        .unwrap();
    let staff_token = jwt
        .issue(&user_repo.find_by_id(staff.id).await.unwrap().unwrap())
        .unwrap();

    let guard = AuthGuard::new(db, &jwt);

    let denied = guard
        .require(&bearer_headers(&staff_token), &[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let granted = guard
        .require(&bearer_headers(&admin_token), &[Permission::Admin])
        .await;
    assert!(granted.is_ok());
}
