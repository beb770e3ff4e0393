//! Token types for the JWT + refresh-token auth scheme.

use serde::{Deserialize, Serialize};

use crate::model::auth::TokenPairDto;

/// Claims carried by every access token.
///
/// `sub` is the user id; `farm_id` scopes every downstream query, and `staff`
/// mirrors the role flag so permission checks don't need a database round trip
/// before the user row is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: i32,
    pub farm_id: i32,
    pub staff: bool,
    pub iat: i64,
    pub exp: i64,
}

/// Freshly issued access + refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
        }
    }
}

/// Outcome of a password login: tokens immediately, or an OTP challenge
/// when the account has two-factor enabled.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Tokens(TokenPair),
    OtpChallenge,
}
