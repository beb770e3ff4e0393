use super::*;
use entity::prelude::Subscriber;

async fn subscriber_with_status(
    db: &sea_orm::DatabaseConnection,
    status: &str,
    period_end: chrono::NaiveDateTime,
) -> Result<crate::server::model::billing::Subscriber, DbErr> {
    let farm = factory::create_farm(db).await?;
    let repo = SubscriberRepository::new(db);
    let stored = repo
        .create_incomplete(farm.id, format!("cus_{}", farm.id), "standard".to_string())
        .await?;
    Ok(repo
        .apply_event(
            stored.id,
            ApplySubscriptionEventParam {
                provider_subscription_id: Some(format!("sub_{}", farm.id)),
                plan: None,
                status: status.to_string(),
                current_period_end: Some(period_end),
            },
        )
        .await?
        .unwrap())
}

/// Tests that the sweep expires active and past-due rows whose period ended.
#[tokio::test]
async fn expires_lapsed_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let past = now - Duration::days(1);

    let lapsed_active = subscriber_with_status(db, SUB_STATUS_ACTIVE, past).await?;
    let lapsed_past_due = subscriber_with_status(db, SUB_STATUS_PAST_DUE, past).await?;

    let repo = SubscriberRepository::new(db);
    let changed = repo.expire_lapsed(now).await?;

    assert_eq!(changed, 2);
    assert_eq!(
        repo.find_by_farm(lapsed_active.farm_id).await?.unwrap().status,
        SUB_STATUS_EXPIRED
    );
    assert_eq!(
        repo.find_by_farm(lapsed_past_due.farm_id)
            .await?
            .unwrap()
            .status,
        SUB_STATUS_EXPIRED
    );

    Ok(())
}

/// Tests that current and terminal rows are left alone by the sweep.
#[tokio::test]
async fn keeps_current_and_terminal_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_table(Subscriber)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now().naive_utc();
    let past = now - Duration::days(1);
    let future = now + Duration::days(10);

    let current = subscriber_with_status(db, SUB_STATUS_ACTIVE, future).await?;
    let canceled = subscriber_with_status(db, SUB_STATUS_CANCELED, past).await?;

    let repo = SubscriberRepository::new(db);
    let changed = repo.expire_lapsed(now).await?;

    assert_eq!(changed, 0);
    assert_eq!(
        repo.find_by_farm(current.farm_id).await?.unwrap().status,
        SUB_STATUS_ACTIVE
    );
    assert_eq!(
        repo.find_by_farm(canceled.farm_id).await?.unwrap().status,
        SUB_STATUS_CANCELED
    );

    Ok(())
}
