//! Authentication service.
//!
//! Covers registration, password login, the email one-time-code second
//! factor, and the access/refresh token lifecycle. Access tokens are short
//! lived JWTs; refresh tokens are opaque random values stored on the user row
//! and rotated on every use.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::server::{
    data::{farm::FarmRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{JwtClaims, LoginOutcome, TokenPair},
        user::{CreateUserParam, User},
    },
    service::mailer::MailerService,
};

/// Minutes an OTP challenge stays valid.
const OTP_TTL_MINUTES: i64 = 10;

const MIN_PASSWORD_LEN: usize = 8;

/// JWT token manager.
///
/// Holds the derived signing keys so the secret is parsed once at startup.
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: i64,
}

impl JwtManager {
    pub fn new(secret: &str, access_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs,
        }
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl_secs
    }

    /// Issues an access token for the given user.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user.id,
            farm_id: user.farm_id,
            staff: user.is_staff,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_ttl_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Validates signature and expiry and returns the claims.
    pub fn validate(&self, token: &str) -> Result<JwtClaims, AuthError> {
        decode::<JwtClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
    refresh_ttl_days: i64,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager, refresh_ttl_days: i64) -> Self {
        Self {
            db,
            jwt,
            refresh_ttl_days,
        }
    }

    /// Registers a new farm with its owner account and logs the owner in.
    ///
    /// The email must be unused across all farms. The first account is the
    /// farm admin; staff accounts are added later through user management.
    pub async fn register(
        &self,
        farm_name: String,
        email: String,
        password: String,
        display_name: String,
    ) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        validate_password(&password)?;
        if user_repo.email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&password)?;

        let farm = FarmRepository::new(self.db).create(farm_name).await?;
        let user = user_repo
            .create(CreateUserParam {
                farm_id: farm.id,
                email,
                password_hash,
                display_name,
                is_staff: false,
            })
            .await?;

        tracing::info!("Registered farm {} with owner {}", farm.id, user.id);

        self.issue_pair(&user).await
    }

    /// Verifies an email/password pair.
    ///
    /// Accounts with the second factor enabled get an OTP challenge mailed to
    /// them instead of tokens; the login completes via [`Self::verify_otp`].
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        mailer: &MailerService,
    ) -> Result<LoginOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        if !user.two_factor_enabled {
            return Ok(LoginOutcome::Tokens(self.issue_pair(&user).await?));
        }

        let code = generate_otp_code();
        let expires_at = (Utc::now() + Duration::minutes(OTP_TTL_MINUTES)).naive_utc();
        user_repo
            .set_otp(user.id, Some(hash_otp(&code)), Some(expires_at))
            .await?;

        mailer.send_otp(&user.email, &code).await?;

        Ok(LoginOutcome::OtpChallenge)
    }

    /// Completes a two-factor login with the mailed code.
    ///
    /// The challenge is consumed on success; a second submission of the same
    /// code fails.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        let (Some(stored_hash), Some(expires_at)) = (&user.otp_code_hash, user.otp_expires_at)
        else {
            return Err(AuthError::InvalidOtp.into());
        };

        if Utc::now().naive_utc() > expires_at || !otp_matches(code, stored_hash) {
            return Err(AuthError::InvalidOtp.into());
        }

        user_repo.set_otp(user.id, None, None).await?;

        self.issue_pair(&user).await
    }

    /// Exchanges a refresh token for a fresh pair, rotating the stored token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        match user.refresh_token_expires_at {
            Some(expires_at) if Utc::now().naive_utc() <= expires_at => {}
            _ => {
                // Expired token: clear it so the row doesn't hold a dead value.
                user_repo.set_refresh_token(user.id, None, None).await?;
                return Err(AuthError::InvalidRefreshToken.into());
            }
        }

        self.issue_pair(&user).await
    }

    /// Invalidates the stored refresh token. Outstanding access tokens remain
    /// valid until they expire.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_refresh_token(user_id, None, None)
            .await?;

        Ok(())
    }

    /// Enables or disables the email second factor for the caller.
    pub async fn set_two_factor(&self, user_id: i32, enabled: bool) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo.set_two_factor(user_id, enabled).await?;
        if !enabled {
            // Drop any pending challenge along with the setting.
            user_repo.set_otp(user_id, None, None).await?;
        }

        Ok(())
    }

    /// Issues an access token and a rotated refresh token for the user.
    async fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.jwt.issue(user)?;
        let refresh_token = generate_refresh_token();
        let expires_at = (Utc::now() + Duration::days(self.refresh_ttl_days)).naive_utc();

        UserRepository::new(self.db)
            .set_refresh_token(user.id, Some(refresh_token.clone()), Some(expires_at))
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.jwt.access_ttl_secs(),
        })
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Six-digit zero-padded one-time code.
fn generate_otp_code() -> String {
    format!("{:06}", rand::random_range(0..1_000_000u32))
}

/// Codes are stored hashed so a database leak doesn't expose live challenges.
fn hash_otp(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of a submitted code against the stored digest.
fn otp_matches(code: &str, stored_hash: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hash) else {
        return false;
    };

    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    let submitted = hasher.finalize();

    bool::from(submitted.as_slice().ct_eq(&stored))
}

/// Opaque 64-character refresh token.
fn generate_refresh_token() -> String {
    let random_bytes: [u8; 32] = rand::random();
    hex::encode(random_bytes)
}
