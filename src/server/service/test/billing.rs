use chrono::Utc;
use entity::prelude::Subscriber;
use test_utils::{builder::TestBuilder, factory};

use crate::model::billing::{WebhookEventDataDto, WebhookEventDto};
use crate::server::{
    data::subscriber::SubscriberRepository,
    error::AppError,
    model::billing::{SUB_STATUS_ACTIVE, SUB_STATUS_CANCELED, SUB_STATUS_PAST_DUE},
    service::billing::{
        sign_webhook, verify_webhook_signature, BillingService, EVENT_CHECKOUT_COMPLETED,
        EVENT_INVOICE_FAILED, EVENT_SUBSCRIPTION_DELETED,
    },
};

const SECRET: &str = "whsec_test";

fn event(event_type: &str, customer_id: &str) -> WebhookEventDto {
    WebhookEventDto {
        event_type: event_type.to_string(),
        data: WebhookEventDataDto {
            customer_id: customer_id.to_string(),
            subscription_id: Some("sub_1".to_string()),
            plan: Some("standard".to_string()),
            period_end: Some(Utc::now().timestamp() + 30 * 24 * 3600),
        },
    }
}

/// Tests that a correctly signed payload passes verification.
///
/// Expected: Ok
#[test]
fn accepts_valid_signature() {
    let body = r#"{"type":"invoice.paid"}"#;
    let now = Utc::now().timestamp();
    let header = sign_webhook(SECRET, body, now);

    assert!(verify_webhook_signature(SECRET, &header, body, now).is_ok());
}

/// Tests that a tampered body fails verification.
///
/// Expected: Err(BadRequest)
#[test]
fn rejects_tampered_body() {
    let now = Utc::now().timestamp();
    let header = sign_webhook(SECRET, r#"{"plan":"standard"}"#, now);

    let result = verify_webhook_signature(SECRET, &header, r#"{"plan":"premium"}"#, now);

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that a stale timestamp fails verification even with a valid
/// signature over it.
///
/// Expected: Err(BadRequest)
#[test]
fn rejects_stale_timestamp() {
    let body = "{}";
    let now = Utc::now().timestamp();
    let header = sign_webhook(SECRET, body, now - 600);

    let result = verify_webhook_signature(SECRET, &header, body, now);

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that a header missing its parts fails verification.
///
/// Expected: Err(BadRequest)
#[test]
fn rejects_malformed_header() {
    let result =
        verify_webhook_signature(SECRET, "v1=deadbeef", "{}", Utc::now().timestamp());

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests that checkout completion activates the subscriber and records the
/// provider's identifiers.
///
/// Expected: status active with subscription id, plan, and period end set.
#[tokio::test]
async fn checkout_completion_activates_subscriber() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await.unwrap();
    let repo = SubscriberRepository::new(db);
    repo.create_incomplete(farm.id, "cus_1".to_string(), "standard".to_string())
        .await
        .unwrap();

    BillingService::new(db)
        .handle_event(event(EVENT_CHECKOUT_COMPLETED, "cus_1"))
        .await
        .unwrap();

    let subscriber = repo.find_by_farm(farm.id).await.unwrap().unwrap();
    assert_eq!(subscriber.status, SUB_STATUS_ACTIVE);
    assert_eq!(subscriber.provider_subscription_id.as_deref(), Some("sub_1"));
    assert!(subscriber.current_period_end.is_some());
}

/// Tests that a failed invoice marks the subscription past due without
/// losing the current period end.
///
/// Expected: status past_due, period end preserved.
#[tokio::test]
async fn failed_invoice_marks_past_due() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await.unwrap();
    let repo = SubscriberRepository::new(db);
    repo.create_incomplete(farm.id, "cus_1".to_string(), "standard".to_string())
        .await
        .unwrap();

    let service = BillingService::new(db);
    service
        .handle_event(event(EVENT_CHECKOUT_COMPLETED, "cus_1"))
        .await
        .unwrap();
    let period_end = repo
        .find_by_farm(farm.id)
        .await
        .unwrap()
        .unwrap()
        .current_period_end;

    service
        .handle_event(WebhookEventDto {
            event_type: EVENT_INVOICE_FAILED.to_string(),
            data: WebhookEventDataDto {
                customer_id: "cus_1".to_string(),
                subscription_id: None,
                plan: None,
                period_end: None,
            },
        })
        .await
        .unwrap();

    let subscriber = repo.find_by_farm(farm.id).await.unwrap().unwrap();
    assert_eq!(subscriber.status, SUB_STATUS_PAST_DUE);
    assert_eq!(subscriber.current_period_end, period_end);
}

/// Tests that a deleted subscription is marked canceled.
///
/// Expected: status canceled.
#[tokio::test]
async fn deleted_subscription_is_canceled() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await.unwrap();
    let repo = SubscriberRepository::new(db);
    repo.create_incomplete(farm.id, "cus_1".to_string(), "standard".to_string())
        .await
        .unwrap();

    BillingService::new(db)
        .handle_event(event(EVENT_SUBSCRIPTION_DELETED, "cus_1"))
        .await
        .unwrap();

    let subscriber = repo.find_by_farm(farm.id).await.unwrap().unwrap();
    assert_eq!(subscriber.status, SUB_STATUS_CANCELED);
}

/// Tests that events for unknown customers and unknown event types are
/// acknowledged without touching the database.
///
/// Expected: Ok, subscriber state unchanged.
#[tokio::test]
async fn unknown_events_are_acknowledged_and_ignored() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await.unwrap();
    let repo = SubscriberRepository::new(db);
    let created = repo
        .create_incomplete(farm.id, "cus_1".to_string(), "standard".to_string())
        .await
        .unwrap();

    let service = BillingService::new(db);
    service
        .handle_event(event(EVENT_CHECKOUT_COMPLETED, "cus_unknown"))
        .await
        .unwrap();
    service
        .handle_event(event("charge.refunded", "cus_1"))
        .await
        .unwrap();

    let subscriber = repo.find_by_farm(farm.id).await.unwrap().unwrap();
    assert_eq!(subscriber, created);
}

/// Tests that no subscription reads as not found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_subscription_is_not_found() {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await.unwrap();

    let result = BillingService::new(db).get_subscription(farm.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
