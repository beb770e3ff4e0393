use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::JwtManager,
};

pub enum Permission {
    Admin,
}

/// Request guard for JWT-authenticated endpoints.
///
/// Validates the bearer token, loads the user row, and checks permissions.
/// Loading the row on every request means a deleted account is locked out as
/// soon as its access token is next used, not when it expires.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager) -> Self {
        Self { db, jwt }
    }

    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<User, AppError> {
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

        self.require_token(token, permissions).await
    }

    /// Same check against a raw token string. Websocket upgrades carry the
    /// token as a query parameter because browsers cannot set headers there.
    pub async fn require_token(
        &self,
        token: &str,
        permissions: &[Permission],
    ) -> Result<User, AppError> {
        let claims = self.jwt.validate(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.is_staff {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Staff account attempted an admin-only operation".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
