use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        billing::{CheckoutRequestDto, CheckoutSessionDto, SubscriptionDto, WebhookEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::billing::{verify_webhook_signature, BillingService},
        state::AppState,
    },
};

/// Tag for grouping billing endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

/// Signature header set by the payment provider on webhook deliveries.
pub static SIGNATURE_HEADER: &str = "Farmboard-Signature";

/// Open a provider checkout session for the farm.
#[utoipa::path(
    post,
    path = "/api/billing/checkout",
    tag = BILLING_TAG,
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Checkout session opened", body = CheckoutSessionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Provider unreachable or internal error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let checkout_url = BillingService::new(&state.db)
        .checkout(admin.farm_id, payload.plan, &state.payment)
        .await?;

    Ok(Json(CheckoutSessionDto { checkout_url }))
}

/// The farm's subscription as last mirrored from the provider.
#[utoipa::path(
    get,
    path = "/api/billing/subscription",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "Subscription", body = SubscriptionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Farm has never checked out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt)
        .require(&headers, &[Permission::Admin])
        .await?;

    let subscription = BillingService::new(&state.db)
        .get_subscription(admin.farm_id)
        .await?;

    Ok(Json(subscription.into_dto()))
}

/// Payment provider webhook.
///
/// Unauthenticated; trust comes from the HMAC signature over the raw body,
/// so the body must be verified before it is parsed.
#[utoipa::path(
    post,
    path = "/api/billing/webhook",
    tag = BILLING_TAG,
    request_body = WebhookEventDto,
    responses(
        (status = 200, description = "Event accepted"),
        (status = 400, description = "Missing, stale, or invalid signature", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing signature header".to_string()))?;

    verify_webhook_signature(&state.webhook_secret, signature, &body, Utc::now().timestamp())?;

    let event: WebhookEventDto = serde_json::from_str(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {}", e)))?;

    BillingService::new(&state.db).handle_event(event).await?;

    Ok(StatusCode::OK)
}
