//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. All fields are cheap to clone: the database connection
//! is a pool handle, `reqwest::Client` and the hub are reference counted,
//! and the JWT manager sits behind an `Arc` because its keys are parsed
//! once from the secret.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    auth::JwtManager, billing::PaymentClient, chat::ChatHub, mailer::MailerService,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing/validation keys for access tokens.
    pub jwt: Arc<JwtManager>,

    /// Refresh token lifetime in days.
    pub refresh_ttl_days: i64,

    /// Outbound mail delivery for OTP codes.
    pub mailer: MailerService,

    /// Payment provider HTTP client.
    pub payment: PaymentClient,

    /// Shared secret for verifying webhook signatures.
    pub webhook_secret: String,

    /// Broadcast hub connecting chat writers to websocket sessions.
    pub chat_hub: ChatHub,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        jwt: Arc<JwtManager>,
        refresh_ttl_days: i64,
        mailer: MailerService,
        payment: PaymentClient,
        webhook_secret: String,
    ) -> Self {
        Self {
            db,
            jwt,
            refresh_ttl_days,
            mailer,
            payment,
            webhook_secret,
            chat_hub: ChatHub::new(),
        }
    }
}
