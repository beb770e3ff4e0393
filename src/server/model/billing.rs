//! Subscriber mirror-row domain model and webhook event types.

use chrono::NaiveDateTime;

use crate::model::billing::SubscriptionDto;

pub const SUB_STATUS_ACTIVE: &str = "active";
pub const SUB_STATUS_PAST_DUE: &str = "past_due";
pub const SUB_STATUS_CANCELED: &str = "canceled";
pub const SUB_STATUS_EXPIRED: &str = "expired";
/// Checkout started but the provider has not confirmed payment yet.
pub const SUB_STATUS_INCOMPLETE: &str = "incomplete";

#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub farm_id: i32,
    pub provider_customer_id: String,
    pub provider_subscription_id: Option<String>,
    pub plan: String,
    pub status: String,
    pub current_period_end: Option<NaiveDateTime>,
}

impl Subscriber {
    pub fn from_entity(entity: entity::subscriber::Model) -> Self {
        Self {
            id: entity.id,
            farm_id: entity.farm_id,
            provider_customer_id: entity.provider_customer_id,
            provider_subscription_id: entity.provider_subscription_id,
            plan: entity.plan,
            status: entity.status,
            current_period_end: entity.current_period_end,
        }
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            plan: self.plan,
            status: self.status,
            current_period_end: self.current_period_end,
        }
    }
}

/// Parameters applied to the mirror row when a webhook event lands.
#[derive(Debug, Clone)]
pub struct ApplySubscriptionEventParam {
    pub provider_subscription_id: Option<String>,
    pub plan: Option<String>,
    pub status: String,
    pub current_period_end: Option<NaiveDateTime>,
}
