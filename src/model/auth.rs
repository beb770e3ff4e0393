use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for registering a new farm and its owner account.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub farm_name: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Login result: either a token pair, or an OTP challenge when the account
/// has two-factor enabled. Tokens are absent while the challenge is pending.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub otp_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenPairDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct OtpVerifyDto {
    pub email: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RefreshDto {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TwoFactorDto {
    pub enabled: bool,
}
