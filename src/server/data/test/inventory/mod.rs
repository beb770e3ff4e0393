use crate::server::{
    data::inventory::{ApplyTransactionOutcome, InventoryRepository},
    model::inventory::UpsertInventoryItemParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_transaction;
mod items;
