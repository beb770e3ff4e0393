use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The Authorization header is missing or not a Bearer token.
    #[error("Missing bearer token")]
    MissingToken,

    /// The access token failed signature or expiry validation.
    #[error("Invalid or expired access token")]
    InvalidToken,

    /// The token verified but the user row no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a user.
    ///
    /// Covers both unknown email and wrong password so the response does not
    /// reveal which accounts exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The submitted OTP code is wrong, already consumed, or expired.
    #[error("Invalid or expired one-time code")]
    InvalidOtp,

    /// The refresh token is unknown or past its expiry.
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    /// An authenticated user attempted an operation reserved for farm admins.
    ///
    /// # Fields
    /// - User id
    /// - Description of the attempted operation, for the server log
    #[error("User {0} denied: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential, token, and OTP failures all map to 401 with deliberately
/// generic messages; permission failures map to 403. Details are logged at
/// debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth rejection: {}", self);

        match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidOtp => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid or expired code".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Session expired, please log in again".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
