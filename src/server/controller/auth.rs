use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            LoginDto, LoginResponseDto, OtpVerifyDto, RefreshDto, RegisterDto, TokenPairDto,
            TwoFactorDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::LoginOutcome,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new farm with its owner account.
///
/// Creates the farm and its first user in one step. The owner account is an
/// admin; staff accounts are added later through user management.
///
/// # Returns
/// - `201 Created` - Token pair for the new owner
/// - `400 Bad Request` - Email already in use or password too short
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Farm and owner created", body = TokenPairDto),
        (status = 400, description = "Email in use or invalid input", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .register(
            payload.farm_name,
            payload.email,
            payload.password,
            payload.display_name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into_dto())))
}

/// Log in with email and password.
///
/// Accounts with the second factor enabled receive an OTP challenge by mail
/// and must complete the login through the verify endpoint; the response
/// then carries no tokens.
///
/// # Returns
/// - `200 OK` - Token pair, or `otp_required` with no tokens
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Tokens or a pending OTP challenge", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .login(&payload.email, &payload.password, &state.mailer)
        .await?;

    let response = match outcome {
        LoginOutcome::Tokens(tokens) => LoginResponseDto {
            otp_required: false,
            tokens: Some(tokens.into_dto()),
        },
        LoginOutcome::OtpChallenge => LoginResponseDto {
            otp_required: true,
            tokens: None,
        },
    };

    Ok(Json(response))
}

/// Complete a two-factor login with the mailed code.
#[utoipa::path(
    post,
    path = "/api/auth/otp/verify",
    tag = AUTH_TAG,
    request_body = OtpVerifyDto,
    responses(
        (status = 200, description = "Login completed", body = TokenPairDto),
        (status = 401, description = "Wrong, expired, or consumed code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpVerifyDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .verify_otp(&payload.email, &payload.code)
        .await?;

    Ok(Json(tokens.into_dto()))
}

/// Exchange a refresh token for a fresh pair.
///
/// Rotation: the submitted token is invalidated and a new one issued.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Fresh token pair", body = TokenPairDto),
        (status = 401, description = "Unknown or expired refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .refresh(&payload.refresh_token)
        .await?;

    Ok(Json(tokens.into_dto()))
}

/// Log out, invalidating the stored refresh token.
///
/// Outstanding access tokens stay valid until they expire.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Refresh token cleared", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .logout(user.id)
        .await?;

    Ok(Json(MessageDto {
        message: "Logged out".to_string(),
    }))
}

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    Ok(Json(user.into_dto()))
}

/// Toggle the email second factor for the caller.
///
/// Disabling also drops any pending OTP challenge.
#[utoipa::path(
    put,
    path = "/api/auth/2fa",
    tag = AUTH_TAG,
    request_body = TwoFactorDto,
    responses(
        (status = 200, description = "Setting updated", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn set_two_factor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TwoFactorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[])
        .await?;

    AuthService::new(&state.db, &state.jwt, state.refresh_ttl_days)
        .set_two_factor(user.id, payload.enabled)
        .await?;

    Ok(Json(MessageDto {
        message: "Two-factor setting updated".to_string(),
    }))
}
