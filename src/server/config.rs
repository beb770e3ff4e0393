use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ACCESS_TTL_SECS: i64 = 900;
const DEFAULT_REFRESH_TTL_DAYS: i64 = 30;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub jwt_access_ttl_secs: i64,
    pub refresh_ttl_days: i64,

    pub payment_api_url: String,
    pub payment_api_key: String,
    pub payment_webhook_secret: String,

    /// Unset means OTP codes are logged instead of mailed (dev mode).
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    pub mail_from: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            app_url: require("APP_URL")?,
            port: optional_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            jwt_secret: require("JWT_SECRET")?,
            jwt_access_ttl_secs: optional_parsed("JWT_ACCESS_TTL_SECS")?
                .unwrap_or(DEFAULT_ACCESS_TTL_SECS),
            refresh_ttl_days: optional_parsed("REFRESH_TTL_DAYS")?
                .unwrap_or(DEFAULT_REFRESH_TTL_DAYS),
            payment_api_url: require("PAYMENT_API_URL")?,
            payment_api_key: require("PAYMENT_API_KEY")?,
            payment_webhook_secret: require("PAYMENT_WEBHOOK_SECRET")?,
            mail_api_url: std::env::var("MAIL_API_URL").ok(),
            mail_api_key: std::env::var("MAIL_API_KEY").ok(),
            mail_from: std::env::var("MAIL_FROM").ok(),
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

fn optional_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), raw).into()),
        Err(_) => Ok(None),
    }
}
