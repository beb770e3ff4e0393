use crate::server::{
    data::subscriber::SubscriberRepository,
    model::billing::{
        ApplySubscriptionEventParam, SUB_STATUS_ACTIVE, SUB_STATUS_CANCELED, SUB_STATUS_EXPIRED,
        SUB_STATUS_INCOMPLETE, SUB_STATUS_PAST_DUE,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_event;
mod expire_lapsed;
