//! Subscriber repository.
//!
//! Each farm holds at most one subscriber row, a local mirror of the payment
//! provider's state kept current by webhook events and the hourly sweep.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter,
};

use crate::server::model::billing::{
    ApplySubscriptionEventParam, Subscriber, SUB_STATUS_ACTIVE, SUB_STATUS_EXPIRED,
    SUB_STATUS_INCOMPLETE, SUB_STATUS_PAST_DUE,
};

pub struct SubscriberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_farm(&self, farm_id: i32) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::FarmId.eq(farm_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    /// Looks up the subscriber by the provider's customer id. Webhook events
    /// identify farms this way.
    pub async fn find_by_provider_customer(
        &self,
        provider_customer_id: &str,
    ) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::ProviderCustomerId.eq(provider_customer_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    /// Creates the farm's subscriber row in the `incomplete` state when a
    /// checkout session is opened.
    pub async fn create_incomplete(
        &self,
        farm_id: i32,
        provider_customer_id: String,
        plan: String,
    ) -> Result<Subscriber, DbErr> {
        let entity = entity::prelude::Subscriber::insert(entity::subscriber::ActiveModel {
            farm_id: ActiveValue::Set(farm_id),
            provider_customer_id: ActiveValue::Set(provider_customer_id),
            provider_subscription_id: ActiveValue::Set(None),
            plan: ActiveValue::Set(plan),
            status: ActiveValue::Set(SUB_STATUS_INCOMPLETE.to_string()),
            current_period_end: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Subscriber::from_entity(entity))
    }

    /// Applies a webhook-derived state change to an existing subscriber row.
    /// `None` fields in the param leave the stored value untouched.
    pub async fn apply_event(
        &self,
        subscriber_id: i32,
        param: ApplySubscriptionEventParam,
    ) -> Result<Option<Subscriber>, DbErr> {
        let Some(existing) = entity::prelude::Subscriber::find_by_id(subscriber_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(subscription_id) = param.provider_subscription_id {
            active.provider_subscription_id = ActiveValue::Set(Some(subscription_id));
        }
        if let Some(plan) = param.plan {
            active.plan = ActiveValue::Set(plan);
        }
        active.status = ActiveValue::Set(param.status);
        active.current_period_end = ActiveValue::Set(param.current_period_end);

        let entity = entity::prelude::Subscriber::update(active)
            .exec(self.db)
            .await?;

        Ok(Some(Subscriber::from_entity(entity)))
    }

    /// Flips subscriptions whose paid period has lapsed to `expired`.
    /// Run by the hourly sweep. Returns the number of rows changed.
    pub async fn expire_lapsed(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Subscriber::update_many()
            .filter(
                Condition::any()
                    .add(entity::subscriber::Column::Status.eq(SUB_STATUS_ACTIVE))
                    .add(entity::subscriber::Column::Status.eq(SUB_STATUS_PAST_DUE)),
            )
            .filter(entity::subscriber::Column::CurrentPeriodEnd.lt(now))
            .col_expr(
                entity::subscriber::Column::Status,
                sea_orm::sea_query::Expr::value(SUB_STATUS_EXPIRED),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
