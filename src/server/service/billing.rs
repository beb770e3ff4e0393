//! Billing service.
//!
//! The database holds a per-farm mirror of the payment provider's
//! subscription state. Checkout goes out through the provider's HTTP API;
//! state comes back through signed webhook events.

use chrono::DateTime;
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::{
    data::subscriber::SubscriberRepository,
    error::AppError,
    model::billing::{
        ApplySubscriptionEventParam, Subscriber, SUB_STATUS_ACTIVE, SUB_STATUS_CANCELED,
        SUB_STATUS_PAST_DUE,
    },
};
use crate::model::billing::WebhookEventDto;

/// Webhook timestamps older or newer than this are rejected.
const WEBHOOK_MAX_SKEW_SECS: i64 = 300;

pub const EVENT_CHECKOUT_COMPLETED: &str = "checkout.session.completed";
pub const EVENT_INVOICE_PAID: &str = "invoice.paid";
pub const EVENT_INVOICE_FAILED: &str = "invoice.payment_failed";
pub const EVENT_SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";

/// HTTP client for the payment provider's API.
#[derive(Clone)]
pub struct PaymentClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    plan: &'a str,
    /// Provider customer to reuse, when the farm checked out before.
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_id: Option<&'a str>,
    /// Our side of the mapping, echoed back in webhook metadata.
    reference: String,
}

#[derive(Deserialize)]
pub struct ProviderCheckoutSession {
    pub customer_id: String,
    pub checkout_url: String,
}

impl PaymentClient {
    pub fn new(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    async fn create_checkout_session(
        &self,
        farm_id: i32,
        plan: &str,
        customer_id: Option<&str>,
    ) -> Result<ProviderCheckoutSession, reqwest::Error> {
        self.client
            .post(format!("{}/checkout/sessions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&CreateSessionRequest {
                plan,
                customer_id,
                reference: format!("farm-{}", farm_id),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderCheckoutSession>()
            .await
    }
}

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a provider checkout session for the farm.
    ///
    /// First checkout also creates the farm's subscriber row in the
    /// `incomplete` state; the webhook moves it forward from there.
    pub async fn checkout(
        &self,
        farm_id: i32,
        plan: String,
        payment: &PaymentClient,
    ) -> Result<String, AppError> {
        let repo = SubscriberRepository::new(self.db);
        let existing = repo.find_by_farm(farm_id).await?;

        let session = payment
            .create_checkout_session(
                farm_id,
                &plan,
                existing.as_ref().map(|s| s.provider_customer_id.as_str()),
            )
            .await?;

        if existing.is_none() {
            repo.create_incomplete(farm_id, session.customer_id, plan)
                .await?;
        }

        Ok(session.checkout_url)
    }

    pub async fn get_subscription(&self, farm_id: i32) -> Result<Subscriber, AppError> {
        SubscriberRepository::new(self.db)
            .find_by_farm(farm_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No subscription for this farm".to_string()))
    }

    /// Applies a verified webhook event to the subscriber mirror.
    ///
    /// Events for unknown customers and unknown event types are acknowledged
    /// and dropped so the provider does not retry them forever.
    pub async fn handle_event(&self, event: WebhookEventDto) -> Result<(), AppError> {
        let repo = SubscriberRepository::new(self.db);

        let Some(subscriber) = repo
            .find_by_provider_customer(&event.data.customer_id)
            .await?
        else {
            tracing::warn!(
                "Webhook event {} for unknown customer {}",
                event.event_type,
                event.data.customer_id
            );
            return Ok(());
        };

        let period_end = event
            .data
            .period_end
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.naive_utc());

        let param = match event.event_type.as_str() {
            EVENT_CHECKOUT_COMPLETED => ApplySubscriptionEventParam {
                provider_subscription_id: event.data.subscription_id,
                plan: event.data.plan,
                status: SUB_STATUS_ACTIVE.to_string(),
                current_period_end: period_end,
            },
            EVENT_INVOICE_PAID => ApplySubscriptionEventParam {
                provider_subscription_id: event.data.subscription_id,
                plan: event.data.plan,
                status: SUB_STATUS_ACTIVE.to_string(),
                current_period_end: period_end.or(subscriber.current_period_end),
            },
            EVENT_INVOICE_FAILED => ApplySubscriptionEventParam {
                provider_subscription_id: None,
                plan: None,
                status: SUB_STATUS_PAST_DUE.to_string(),
                current_period_end: subscriber.current_period_end,
            },
            EVENT_SUBSCRIPTION_DELETED => ApplySubscriptionEventParam {
                provider_subscription_id: None,
                plan: None,
                status: SUB_STATUS_CANCELED.to_string(),
                current_period_end: subscriber.current_period_end,
            },
            other => {
                tracing::debug!("Ignoring webhook event type {}", other);
                return Ok(());
            }
        };

        tracing::info!(
            "Webhook {} moves farm {} subscription to {}",
            event.event_type,
            subscriber.farm_id,
            param.status
        );

        repo.apply_event(subscriber.id, param).await?;

        Ok(())
    }

    /// Flips lapsed subscriptions to `expired`. Run by the hourly sweep.
    pub async fn expire_lapsed(&self) -> Result<u64, AppError> {
        let changed = SubscriberRepository::new(self.db)
            .expire_lapsed(chrono::Utc::now().naive_utc())
            .await?;

        if changed > 0 {
            tracing::info!("Expired {} lapsed subscriptions", changed);
        }

        Ok(changed)
    }
}

/// Verifies a webhook signature header of the form `t=<unix>,v1=<hex>`.
///
/// The signature covers `"{t}.{body}"`, so a replayed body cannot be
/// re-stamped with a fresh timestamp.
pub fn verify_webhook_signature(
    secret: &str,
    header: &str,
    body: &str,
    now_unix: i64,
) -> Result<(), AppError> {
    let mut timestamp: Option<i64> = None;
    let mut signature: Option<&str> = None;

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => signature = Some(value),
            _ => {}
        }
    }

    let (Some(timestamp), Some(signature)) = (timestamp, signature) else {
        return Err(AppError::BadRequest(
            "Malformed webhook signature header".to_string(),
        ));
    };

    if (now_unix - timestamp).abs() > WEBHOOK_MAX_SKEW_SECS {
        tracing::warn!("Rejected webhook with stale timestamp {}", timestamp);
        return Err(AppError::BadRequest(
            "Webhook timestamp outside tolerance".to_string(),
        ));
    }

    let expected = hex::decode(signature)
        .map_err(|_| AppError::BadRequest("Malformed webhook signature".to_string()))?;

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::InternalError(format!("Invalid webhook secret: {}", e)))?;
    mac.update(format!("{}.{}", timestamp, body).as_bytes());

    mac.verify_slice(&expected).map_err(|_| {
        tracing::warn!("Rejected webhook with invalid signature");
        AppError::BadRequest("Invalid webhook signature".to_string())
    })
}

/// Builds a signature header for a body. Test helper and reference for the
/// provider-side contract.
#[cfg(test)]
pub fn sign_webhook(secret: &str, body: &str, timestamp: i64) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{}.{}", timestamp, body).as_bytes());
    format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
}
