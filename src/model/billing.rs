use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SubscriptionDto {
    pub plan: String,
    pub status: String,
    pub current_period_end: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequestDto {
    pub plan: String,
}

/// Provider-hosted checkout page the client should redirect to.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckoutSessionDto {
    pub checkout_url: String,
}

/// Webhook event envelope as posted by the payment provider.
///
/// The raw body is verified against the `Farmboard-Signature` header before
/// this is ever deserialized.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct WebhookEventDto {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookEventDataDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct WebhookEventDataDto {
    pub customer_id: String,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    /// Unix seconds; end of the paid period where the event carries one.
    #[serde(default)]
    pub period_end: Option<i64>,
}
