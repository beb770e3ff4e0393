use super::*;
use entity::prelude::Subscriber;

/// Tests creating the incomplete subscriber row at checkout time.
#[tokio::test]
async fn creates_incomplete_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SubscriberRepository::new(db);
    let subscriber = repo
        .create_incomplete(farm.id, "cus_123".to_string(), "standard".to_string())
        .await?;

    assert_eq!(subscriber.farm_id, farm.id);
    assert_eq!(subscriber.status, SUB_STATUS_INCOMPLETE);
    assert!(subscriber.provider_subscription_id.is_none());
    assert!(subscriber.current_period_end.is_none());

    Ok(())
}

/// Tests the unique constraint of one subscriber per farm.
#[tokio::test]
async fn rejects_second_subscriber_for_farm() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SubscriberRepository::new(db);
    repo.create_incomplete(farm.id, "cus_123".to_string(), "standard".to_string())
        .await?;
    let result = repo
        .create_incomplete(farm.id, "cus_456".to_string(), "standard".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up the subscriber by the provider's customer id.
#[tokio::test]
async fn finds_by_provider_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SubscriberRepository::new(db);
    let stored = repo
        .create_incomplete(farm.id, "cus_123".to_string(), "standard".to_string())
        .await?;

    let found = repo.find_by_provider_customer("cus_123").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, stored.id);

    assert!(repo.find_by_provider_customer("cus_999").await?.is_none());

    Ok(())
}

/// Tests applying an activation event.
///
/// The event carries the subscription id, plan, and period end; all three
/// must land on the row along with the active status.
#[tokio::test]
async fn activates_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SubscriberRepository::new(db);
    let stored = repo
        .create_incomplete(farm.id, "cus_123".to_string(), "standard".to_string())
        .await?;

    let period_end = (Utc::now() + Duration::days(30)).naive_utc();
    let updated = repo
        .apply_event(
            stored.id,
            ApplySubscriptionEventParam {
                provider_subscription_id: Some("sub_abc".to_string()),
                plan: Some("premium".to_string()),
                status: SUB_STATUS_ACTIVE.to_string(),
                current_period_end: Some(period_end),
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, SUB_STATUS_ACTIVE);
    assert_eq!(updated.provider_subscription_id.as_deref(), Some("sub_abc"));
    assert_eq!(updated.plan, "premium");
    assert_eq!(updated.current_period_end, Some(period_end));

    Ok(())
}

/// Tests that an event without subscription id or plan keeps the stored ones.
#[tokio::test]
async fn preserves_fields_absent_from_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let farm = factory::create_farm(db).await?;

    let repo = SubscriberRepository::new(db);
    let stored = repo
        .create_incomplete(farm.id, "cus_123".to_string(), "standard".to_string())
        .await?;
    repo.apply_event(
        stored.id,
        ApplySubscriptionEventParam {
            provider_subscription_id: Some("sub_abc".to_string()),
            plan: None,
            status: SUB_STATUS_ACTIVE.to_string(),
            current_period_end: None,
        },
    )
    .await?;

    let updated = repo
        .apply_event(
            stored.id,
            ApplySubscriptionEventParam {
                provider_subscription_id: None,
                plan: None,
                status: SUB_STATUS_CANCELED.to_string(),
                current_period_end: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, SUB_STATUS_CANCELED);
    assert_eq!(updated.provider_subscription_id.as_deref(), Some("sub_abc"));
    assert_eq!(updated.plan, "standard");

    Ok(())
}
